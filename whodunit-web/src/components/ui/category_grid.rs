use crate::i18n::t;
use whodunit_game::{Category, RANDOM_CATEGORY};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub categories: Vec<Category>,
    /// Selected category id, `"random"` for Surprise Me.
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    pub on_select: Callback<String>,
    pub on_surprise: Callback<()>,
    pub on_clear: Callback<()>,
}

fn tile(category: &Category, selected: bool, on_select: &Callback<String>) -> Html {
    let onclick = {
        let cb = on_select.clone();
        let id = category.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let class = classes!("category-card", selected.then_some("category-card--selected"));
    html! {
        <li key={category.id.clone()}>
            <button
                type="button"
                {class}
                aria-pressed={selected.to_string()}
                data-category={category.id.clone()}
                {onclick}
            >
                <span class="category-card__name">{ category.name.clone() }</span>
                <span class="category-card__description">{ category.description.clone() }</span>
                if !category.tone_tags.is_empty() {
                    <span class="category-card__tags">{ category.tone_tags.join(" · ") }</span>
                }
            </button>
        </li>
    }
}

#[function_component(CategoryGrid)]
pub fn category_grid(p: &Props) -> Html {
    let selected = p.selected.as_deref();
    let on_surprise = {
        let cb = p.on_surprise.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let random = selected == Some(RANDOM_CATEGORY);
    html! {
        <section class="panel category-grid" aria-labelledby="categories-heading">
            <h2 id="categories-heading">{ t("categories.heading") }</h2>
            if p.categories.is_empty() {
                <p class="muted">{ t("categories.loading") }</p>
            } else {
                <ul class="category-grid__list">
                    { for p.categories.iter().map(|c| tile(c, selected == Some(c.id.as_str()), &p.on_select)) }
                </ul>
            }
            <div class="controls">
                <button
                    id="surprise-btn"
                    type="button"
                    class={classes!("category-card", random.then_some("category-card--selected"))}
                    aria-pressed={random.to_string()}
                    onclick={on_surprise}
                >
                    { t("categories.surprise") }
                </button>
                <button id="clear-category-btn" type="button" onclick={on_clear} disabled={selected.is_none()}>
                    { t("categories.clear") }
                </button>
            </div>
            if random {
                <p class="muted">{ t("categories.random_selected") }</p>
            }
        </section>
    }
}

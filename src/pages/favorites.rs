//! Favorites Page

use leptos::prelude::*;
use skate_core::favorites::{FavoriteItem, FavoriteKind};

use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, ToastKind};
use crate::store::{store_remove_favorite, use_app_store, AppStateStoreFields};

const KINDS: [FavoriteKind; 3] = [FavoriteKind::Competition, FavoriteKind::Event, FavoriteKind::Skater];

fn of_kind(items: &[FavoriteItem], kind: FavoriteKind) -> Vec<FavoriteItem> {
    let mut list: Vec<FavoriteItem> = items.iter().filter(|item| item.kind == kind).cloned().collect();
    list.sort_by_key(|item| item.name.to_lowercase());
    list
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let remove = move |item: FavoriteItem| {
        if let Err(e) = store_remove_favorite(&store, item.kind, &item.id) {
            tracing::error!("removing favorite failed: {e}");
            ctx.notify(ToastKind::Error, "Could not update favorites on this device");
        }
    };

    view! {
        <div class="page favorites-page">
            <h1>"Favorites"</h1>
            <Show
                when=move || !store.favorites().read().is_empty()
                fallback=|| view! { <p class="empty">"Tap ☆ on a competition, event or skater to keep it here."</p> }
            >
                {move || {
                    let items = store.favorites().get();
                    KINDS
                        .into_iter()
                        .filter_map(|kind| {
                            let list = of_kind(&items, kind);
                            (!list.is_empty()).then(|| {
                                view! {
                                    <section class="favorite-group">
                                        <h2>{kind.label()}</h2>
                                        <ul>
                                            <For
                                                each=move || list.clone()
                                                key=|item| item.id.clone()
                                                children=move |item| {
                                                    let target = item.clone();
                                                    view! {
                                                        <li class="favorite-item">
                                                            <a href=item.url.clone()>{item.name.clone()}</a>
                                                            <DeleteConfirmButton
                                                                button_class="favorite-remove-btn"
                                                                on_confirm=move |_| remove(target.clone())
                                                            />
                                                        </li>
                                                    }
                                                }
                                            />
                                        </ul>
                                    </section>
                                }
                            })
                        })
                        .collect_view()
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skate_core::favorites::FavoriteParams;

    #[test]
    fn test_of_kind_filters_and_sorts() {
        let items = vec![
            FavoriteItem::new(&FavoriteParams::Skater { skater_id: 2 }, "zoe"),
            FavoriteItem::new(&FavoriteParams::Competition { year: 2024, ijs_id: "1".into() }, "Nationals"),
            FavoriteItem::new(&FavoriteParams::Skater { skater_id: 1 }, "Amber"),
        ];
        let skaters = of_kind(&items, FavoriteKind::Skater);
        assert_eq!(skaters.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(), vec!["Amber", "zoe"]);
    }
}

use yew::prelude::*;

use crate::hooks::{use_navigator, UseSessionHandle};
use crate::routes::Route;

/// Barra superior: secciones, email de la sesión y logout
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_context::<UseSessionHandle>();
    let navigate = use_navigator();
    let menu_open = use_state(|| false);

    let link = |label: &'static str, route: Route| {
        let (navigate, menu_open) = (navigate.clone(), menu_open.clone());
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            navigate.emit(route);
        });
        html! { <a class="navbar-item" href={route.to_path()} {onclick}>{ label }</a> }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_e: MouseEvent| menu_open.set(!*menu_open))
    };

    let email = session
        .as_ref()
        .and_then(|session| session.state.email().map(str::to_string))
        .unwrap_or_default();
    let on_logout = {
        let session = session.clone();
        Callback::from(move |_e: MouseEvent| {
            if let Some(session) = &session {
                log::info!("👋 Logout");
                session.sign_out.emit(());
            }
        })
    };

    let menu_class = classes!("navbar-menu", menu_open.then_some("is-active"));

    html! {
        <nav class="navbar is-dark" role="navigation" aria-label="main navigation">
            <div class="navbar-brand">
                { link("Back Office", Route::Products) }
                <a role="button" class="navbar-burger" aria-label="menu" onclick={toggle_menu}>
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                    <span aria-hidden="true"></span>
                </a>
            </div>
            <div class={menu_class}>
                <div class="navbar-start">
                    <div class="navbar-item has-dropdown is-hoverable">
                        <a class="navbar-link">{ "Orders" }</a>
                        <div class="navbar-dropdown">
                            { link("To ship", Route::OrdersToShip) }
                            { link("Shipped", Route::OrdersShipped) }
                            { link("All", Route::OrdersAll) }
                        </div>
                    </div>
                    <div class="navbar-item has-dropdown is-hoverable">
                        <a class="navbar-link">{ "Shop" }</a>
                        <div class="navbar-dropdown">
                            { link("Product", Route::Products) }
                            { link("Discount Code", Route::DiscountCodes) }
                        </div>
                    </div>
                    <div class="navbar-item has-dropdown is-hoverable">
                        <a class="navbar-link">{ "Staff" }</a>
                        <div class="navbar-dropdown">
                            { link("User", Route::Users) }
                            { link("Admin", Route::Admins) }
                        </div>
                    </div>
                </div>
                <div class="navbar-end">
                    <div class="navbar-item">{ format!("You are logged in as {}", email) }</div>
                    <div class="navbar-item">
                        <button type="button" class="button is-light" onclick={on_logout}>{ "Logout" }</button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

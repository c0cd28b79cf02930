// ============================================================================
// APP - Raíz: contexto de sesión, control de acceso y router
// ============================================================================
// Mientras se restaura la sesión solo se muestra el spinner; después cada
// ruta pasa por `gate` y las redirecciones reemplazan la URL actual.
// ============================================================================

use yew::prelude::*;

use crate::components::admins::{AdminDetails, AdminFormView, AdminList};
use crate::components::discount_codes::{DiscountCodeDetails, DiscountCodeFormView, DiscountCodeList};
use crate::components::navbar::Navbar;
use crate::components::orders::{OrderDetails, OrderFilter, OrderFormView, OrderList};
use crate::components::products::{ProductDetails, ProductFormView, ProductList};
use crate::components::shared::FullPageSpinner;
use crate::components::sign_in::SignIn;
use crate::components::users::{UserDetails, UserList};
use crate::hooks::{SessionContextProvider, UseLocationHandle, UseSessionHandle};
use crate::routes::{gate, GateDecision, Route};
use crate::stores::StartupPhase;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <Shell />
        </SessionContextProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let session = use_context::<UseSessionHandle>();
    let location = use_context::<UseLocationHandle>();

    let path = location
        .as_ref()
        .map(|location| (*location.path).clone())
        .unwrap_or_else(|| "/".to_string());
    // Sin decisión hasta terminar el restore
    let decision = session
        .as_ref()
        .filter(|session| session.state.phase == StartupPhase::Ready)
        .map(|session| gate(&path, session.state.is_authenticated()));

    {
        let replace = location.as_ref().map(|location| location.replace.clone());
        use_effect_with(decision, move |decision| {
            if let (Some(GateDecision::Redirect(route)), Some(replace)) = (decision, replace) {
                log::info!("🔀 Redirección a {}", route.to_path());
                replace.emit(*route);
            }
            || ()
        });
    }

    match decision {
        None => html! { <FullPageSpinner /> },
        Some(GateDecision::Redirect(_)) => html! {},
        Some(GateDecision::Render(Route::SignIn)) => html! { <SignIn /> },
        Some(GateDecision::Render(route)) => html! {
            <>
                <Navbar />
                <section class="section">
                    // Cada URL es una vista nueva (estado y fetch propios)
                    <div class="container" key={path}>{ view(route) }</div>
                </section>
            </>
        },
    }
}

fn view(route: Route) -> Html {
    match route {
        Route::SignIn => html! { <SignIn /> },
        Route::Products => html! { <ProductList /> },
        Route::ProductAdd => html! { <ProductFormView /> },
        Route::ProductDetails(id) => html! { <ProductDetails {id} /> },
        Route::ProductEdit(id) => html! { <ProductFormView target={Some(id)} /> },
        Route::DiscountCodes => html! { <DiscountCodeList /> },
        Route::DiscountCodeAdd => html! { <DiscountCodeFormView /> },
        Route::DiscountCodeDetails(id) => html! { <DiscountCodeDetails {id} /> },
        Route::DiscountCodeEdit(id) => html! { <DiscountCodeFormView target={Some(id)} /> },
        Route::OrdersAll => html! { <OrderList filter={OrderFilter::All} /> },
        Route::OrdersShipped => html! { <OrderList filter={OrderFilter::Shipped} /> },
        Route::OrdersToShip => html! { <OrderList filter={OrderFilter::ToShip} /> },
        Route::OrderDetails(id) => html! { <OrderDetails {id} /> },
        Route::OrderEdit(id) => html! { <OrderFormView {id} /> },
        Route::Users => html! { <UserList /> },
        Route::UserDetails(id) => html! { <UserDetails {id} /> },
        Route::Admins => html! { <AdminList /> },
        Route::AdminAdd => html! { <AdminFormView /> },
        Route::AdminDetails(id) => html! { <AdminDetails {id} /> },
        Route::AdminEdit(id) => html! { <AdminFormView target={Some(id)} /> },
    }
}

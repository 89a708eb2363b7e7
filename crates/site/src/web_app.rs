use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use pc_interface::{Interface, InterfaceProvider};
use room_scene::{return_href, RoomView};

/// Route of the simulated PC.
pub const INTERFACE_PATH: &str = "/info";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="supTE" />
        <Meta name="description" content="A portfolio room with a tiny computer inside." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=RoomEntry />
                    <Route path=INTERFACE_PATH view=PcEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn RoomEntry() -> impl IntoView {
    let navigate = use_navigate();
    let enter_pc = Callback::new(move |()| navigate(INTERFACE_PATH, Default::default()));

    view! { <RoomView on_enter_pc=enter_pc /> }
}

#[component]
pub fn PcEntry() -> impl IntoView {
    let navigate = use_navigate();
    let shut_down = Callback::new(move |()| {
        let href = return_href(&platform_host_web::key_value_store());
        navigate(&href, Default::default());
    });

    view! {
        <InterfaceProvider>
            <Interface on_shutdown=shut_down />
        </InterfaceProvider>
    }
}

use dioxus::prelude::*;
use services::PortalApi;

/// Simulated API from context.
pub fn use_api() -> PortalApi {
    use_context::<PortalApi>()
}

/// `false` until the page's simulated data load has finished. Pages render
/// skeletons until then.
pub fn use_page_ready() -> Signal<bool> {
    let api = use_api();
    let mut ready = use_signal(|| false);

    use_hook(move || {
        spawn(async move {
            api.page_load().await;
            ready.set(true);
        });
    });

    ready
}

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
use lol_alloc::{FreeListAllocator, LockedAllocator};

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
#[global_allocator]
static ALLOCATOR: LockedAllocator<FreeListAllocator> =
    LockedAllocator::new(FreeListAllocator::new());

fn main() {
    // Set up better panic messages for wasm
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    console_error_panic_hook::set_once();

    // Must happen before dioxus::launch so dioxus skips its own init
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        let _ = set_global_default(Registry::default().with(wasm_layer));
    }

    tracing::info!(api = %quire_app::CONFIG.api_url, "starting");
    dioxus::launch(quire_app::App);
}

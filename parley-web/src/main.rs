mod source;
mod ui;

fn main() {
    let max_level = match cfg!(debug_assertions) {
        true => tracing::Level::DEBUG,
        false => tracing::Level::INFO,
    };
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(max_level)
            .build(),
    );
    yew::Renderer::<ui::App>::new().render();
}

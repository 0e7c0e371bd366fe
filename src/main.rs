use grapho::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}

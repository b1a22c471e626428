use page::Page;

mod content;
mod expertise;
mod icons;
mod nav;
mod page;
mod profile;
mod projects;
mod recommendations;
mod research;
mod section;
mod talks;
mod theme;
mod types;

fn main() {
    yew::Renderer::<Page>::new().render();
}

use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact_form::Contact;
use super::hero::Hero;
use super::showcase::FeaturedProjects;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <FeaturedProjects />
        <Contact />
    }
}

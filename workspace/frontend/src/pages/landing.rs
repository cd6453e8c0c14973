use yew::prelude::*;
use crate::components::landing::{Carousel, Header, Navbar};

/// Landing page: header, navbar and carousel stacked in that order.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <>
            <Header />
            <Navbar />
            <section class="my-10 h-screen bg-white">
                <Carousel />
            </section>
        </>
    }
}

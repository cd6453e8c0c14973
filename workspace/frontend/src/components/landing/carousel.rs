use yew::prelude::*;

struct Slide {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    background: &'static str,
}

const SLIDES: [Slide; 3] = [
    Slide {
        id: "slide1",
        title: "Find the expert you need",
        subtitle: "Design, development and marketing in one place",
        background: "bg-primary text-primary-content",
    },
    Slide {
        id: "slide2",
        title: "Launch your side project",
        subtitle: "Freelancers ready to start today",
        background: "bg-secondary text-secondary-content",
    },
    Slide {
        id: "slide3",
        title: "Grow your business",
        subtitle: "Marketing packages for every budget",
        background: "bg-accent text-accent-content",
    },
];

/// Anchor-driven carousel; navigation is handled by the browser.
#[function_component(Carousel)]
pub fn carousel() -> Html {
    html! {
        <div class="carousel w-full h-[480px] rounded-box">
            { for SLIDES.iter().enumerate().map(|(i, slide)| {
                let prev = SLIDES[(i + SLIDES.len() - 1) % SLIDES.len()].id;
                let next = SLIDES[(i + 1) % SLIDES.len()].id;
                html! {
                    <div id={slide.id} class={classes!("carousel-item", "relative", "w-full", slide.background)}>
                        <div class="hero">
                            <div class="hero-content text-center">
                                <div class="max-w-md">
                                    <h1 class="text-5xl font-bold">{slide.title}</h1>
                                    <p class="py-6">{slide.subtitle}</p>
                                </div>
                            </div>
                        </div>
                        <div class="absolute left-5 right-5 top-1/2 flex -translate-y-1/2 transform justify-between">
                            <a href={format!("#{}", prev)} class="btn btn-circle">{"❮"}</a>
                            <a href={format!("#{}", next)} class="btn btn-circle">{"❯"}</a>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

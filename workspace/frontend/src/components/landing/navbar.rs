use yew::prelude::*;

const CATEGORIES: [&str; 8] = [
    "Design",
    "IT & Programming",
    "Video & Photo",
    "Marketing",
    "Translation",
    "Writing",
    "Business",
    "Lessons",
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar bg-base-100 border-b border-base-300 min-h-0 px-6">
            <div class="dropdown lg:hidden">
                <div tabindex="0" role="button" class="btn btn-ghost btn-sm">
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h8m-8 6h16" />
                    </svg>
                </div>
                <ul tabindex="0" class="menu menu-sm dropdown-content mt-3 z-[1] p-2 shadow bg-base-100 rounded-box w-52">
                    { for CATEGORIES.iter().map(|category| html! { <li><a>{*category}</a></li> }) }
                </ul>
            </div>
            <ul class="menu menu-horizontal menu-sm hidden lg:flex px-1">
                { for CATEGORIES.iter().map(|category| html! { <li><a>{*category}</a></li> }) }
            </ul>
        </nav>
    }
}

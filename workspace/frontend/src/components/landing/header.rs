use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="navbar bg-base-100 border-b border-base-300 px-6">
            <div class="navbar-start">
                <Link<Route> to={Route::Landing} classes="btn btn-ghost text-2xl font-bold text-primary">{"Kmong"}</Link<Route>>
            </div>
            <div class="navbar-center hidden md:flex w-1/2">
                <label class="input input-bordered flex items-center gap-2 w-full">
                    <input type="text" class="grow" placeholder="Search for services" />
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5 opacity-70" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" />
                    </svg>
                </label>
            </div>
            <div class="navbar-end gap-2">
                <Link<Route> to={Route::Dashboard} classes="btn btn-ghost btn-sm">{"Dashboard"}</Link<Route>>
                <button class="btn btn-outline btn-sm">{"Log in"}</button>
                <button class="btn btn-primary btn-sm">{"Sign up"}</button>
            </div>
        </header>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Pulsing placeholder block; size it with utility classes.
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    html! {
        <div class={classes!("skeleton", "rounded-md", props.class.clone())}></div>
    }
}

/// Placeholder matching the height distribution card: title, chart, total.
#[function_component(DistributionSkeleton)]
pub fn distribution_skeleton() -> Html {
    html! {
        <div class="min-w-[1000px] w-1/2 px-20 py-10">
            <div class="flex flex-col space-y-3 py-10">
                <Skeleton class="h-10 w-[250px]" />
                <Skeleton class="h-[400px] w-[800px] rounded-xl" />
                <div class="space-y-2">
                    <Skeleton class="h-6 w-[250px]" />
                </div>
            </div>
        </div>
    }
}

//! Right-hand marketing column: background image, headline, stat tiles.

#[cfg(test)]
#[path = "showcase_panel_test.rs"]
mod showcase_panel_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StatIcon {
    Briefcase,
    File,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct StatTile {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: StatIcon,
}

pub(crate) const STATS: &[StatTile] = &[
    StatTile { number: "175,324", label: "Live Job", icon: StatIcon::Briefcase },
    StatTile { number: "97,354", label: "Companies", icon: StatIcon::File },
    StatTile { number: "7,532", label: "News Jobs", icon: StatIcon::File },
];

pub(crate) const HEADLINE: [&str; 2] = ["Over 1,75,324 candidates", "waiting for good employees."];

#[component]
pub fn ShowcasePanel() -> impl IntoView {
    view! {
        <section class="showcase-panel">
            <div class="showcase-panel__image"></div>
            <div class="showcase-panel__overlay"></div>
            <div class="showcase-panel__content">
                <h1 class="showcase-panel__headline">
                    {HEADLINE[0]}
                    <br/>
                    {HEADLINE[1]}
                </h1>
                <div class="showcase-panel__stats">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stat-tile">
                                    {render_icon(stat.icon)}
                                    <span class="stat-tile__number">{stat.number}</span>
                                    <span class="stat-tile__label">{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn render_icon(icon: StatIcon) -> impl IntoView {
    match icon {
        StatIcon::Briefcase => view! {
            <svg class="stat-tile__icon" width="32" height="32" viewBox="0 0 32 32" fill="none" aria-hidden="true">
                <path
                    opacity="0.2"
                    d="M16 18.9999C11.7872 19.0066 7.64764 17.8991 4.00098 15.7897V25.9999C4.00098 26.5522 4.44869 26.9999 5.00098 26.9999H27.001C27.5533 26.9999 28.001 26.5522 28.001 25.9999V15.7886C24.3539 17.8987 20.2135 19.0066 16 18.9999Z"
                    fill="white"
                />
                <path
                    d="M27.001 9H5.00098C4.44869 9 4.00098 9.44772 4.00098 10V26C4.00098 26.5523 4.44869 27 5.00098 27H27.001C27.5533 27 28.001 26.5523 28.001 26V10C28.001 9.44772 27.5533 9 27.001 9Z"
                    stroke="white"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
                <path
                    d="M21 9V7C21 5.89543 20.1046 5 19 5H13C11.8954 5 11 5.89543 11 7V9"
                    stroke="white"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
                <path
                    d="M28.001 15.7886C24.3539 17.8986 20.2136 19.0066 16 18.9999C11.7872 19.0066 7.64755 17.899 4.00085 15.7896"
                    stroke="white"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
                <path d="M14.5 15H17.5" stroke="white" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
            </svg>
        }
        .into_any(),
        StatIcon::File => view! { <img class="stat-tile__icon stat-tile__icon--file" src="/assets/file.svg" alt=""/> }.into_any(),
    }
}

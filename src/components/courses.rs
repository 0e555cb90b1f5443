//! Course grid with the level filter bar.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{Course, CourseFilter, Level};

#[derive(Properties, PartialEq)]
pub struct CourseGridProps {
    pub courses: Vec<Course>,
}

#[function_component(CourseGrid)]
pub fn course_grid(props: &CourseGridProps) -> Html {
    let filter = use_state(CourseFilter::default);

    let options =
        std::iter::once(CourseFilter::All).chain(Level::ALL.into_iter().map(CourseFilter::Only));

    html! {
        <div class="course-grid-wrap">
            <div class="course-filters" role="group" aria-label="Filter courses by level">
                { for options.map(|option| {
                    let is_active = *filter == option;
                    let onclick = {
                        let filter = filter.clone();
                        Callback::from(move |_: MouseEvent| filter.set(option))
                    };
                    html! {
                        <button
                            class={classes!("filter-btn", is_active.then(|| "active"))}
                            aria-pressed={is_active.to_string()}
                            {onclick}
                        >
                            { option.label() }
                        </button>
                    }
                })}
            </div>
            <div class="course-grid">
                { for props.courses.iter().filter(|course| filter.matches(course)).map(course_card) }
            </div>
        </div>
    }
}

fn course_card(course: &Course) -> Html {
    html! {
        <div class="course-card" key={course.title.clone()}>
            <span class={classes!("level-badge", course.level.id())}>
                { course.level.label() }
            </span>
            <h3 class="course-title">{ &course.title }</h3>
            <p class="course-blurb">{ &course.blurb }</p>
            <span class="course-weeks">{ format!("{} weeks", course.weeks) }</span>
        </div>
    }
}

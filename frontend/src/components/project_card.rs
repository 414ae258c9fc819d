use yew::prelude::*;

use crate::catalog::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    html! {
        <article class="project-card">
            <div class="project-meta">
                <span class="project-event">{&project.event}</span>
                <span class="project-date">{project.submitted_label()}</span>
            </div>
            <h3>{&project.title}</h3>
            <p class="project-team">{"by "}{&project.team}</p>
            <p class="project-tagline">{&project.tagline}</p>
            <ul class="project-tags">
                { for project.tags.iter().map(|tag| html! { <li>{tag}</li> }) }
            </ul>
            <div class="project-links">
                {
                    match &project.demo_url {
                        Some(url) => html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer">{"Live demo"}</a>
                        },
                        None => html! {},
                    }
                }
                {
                    match &project.repo_url {
                        Some(url) => html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer">{"Source"}</a>
                        },
                        None => html! {},
                    }
                }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectGridProps {
    pub projects: Vec<Project>,
}

#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    html! {
        <div class="projects-grid">
            {
                props.projects.iter().map(|project| html! {
                    <ProjectCard project={project.clone()} />
                }).collect::<Html>()
            }
            <style>
                {r#"
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 1.5rem;
                    }
                    .project-card {
                        background: rgba(30, 30, 30, 0.8);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 16px;
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        transition: border-color 0.3s ease;
                    }
                    .project-card:hover {
                        border-color: rgba(30, 144, 255, 0.4);
                    }
                    .project-meta {
                        display: flex;
                        justify-content: space-between;
                        color: #777;
                        font-size: 0.8rem;
                    }
                    .project-card h3 {
                        color: #fff;
                        margin: 0.3rem 0 0;
                    }
                    .project-team {
                        color: #7EB2FF;
                        font-size: 0.9rem;
                        margin: 0;
                    }
                    .project-tagline {
                        color: #bbb;
                        line-height: 1.5;
                        flex-grow: 1;
                    }
                    .project-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.4rem;
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .project-tags li {
                        background: rgba(30, 144, 255, 0.1);
                        color: #7EB2FF;
                        border-radius: 999px;
                        padding: 0.2rem 0.7rem;
                        font-size: 0.75rem;
                    }
                    .project-links {
                        display: flex;
                        gap: 1rem;
                        margin-top: 0.5rem;
                    }
                    .project-links a {
                        color: #1E90FF;
                        text-decoration: none;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
        </div>
    }
}

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{SITE_NAME, SUPPORT_EMAIL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Visitor,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: &'static str,
}

pub const SCRIPT: &[ChatLine] = &[
    ChatLine { speaker: Speaker::Visitor, text: "Can first-years enter the next hackathon?" },
    ChatLine { speaker: Speaker::Support, text: "Absolutely! Teams of 2-4, any year, any degree." },
    ChatLine { speaker: Speaker::Visitor, text: "Do we need a finished product?" },
    ChatLine { speaker: Speaker::Support, text: "Nope, a working demo and a two minute pitch is plenty." },
];

/// Delay before showing the next line.
const LINE_DELAY_MS: u32 = 1800;
/// How long the full conversation stays on screen before restarting.
const HOLD_MS: u32 = 6000;

/// Lines visible after `shown`, and the delay before the next step.
fn next_step(shown: usize) -> (usize, u32) {
    if shown >= SCRIPT.len() {
        (0, HOLD_MS)
    } else {
        (shown + 1, LINE_DELAY_MS)
    }
}

/// `mailto:` link with a percent-encoded subject line.
pub fn support_mailto(subject: &str) -> String {
    format!("mailto:{}?subject={}", SUPPORT_EMAIL, urlencoding::encode(subject))
}

#[function_component(SupportCard)]
pub fn support_card() -> Html {
    let shown = use_state(|| 0usize);

    {
        let shown_setter = shown.setter();
        use_effect_with_deps(
            move |shown| {
                let (next, delay) = next_step(*shown);
                let timeout = Timeout::new(delay, move || shown_setter.set(next));
                move || drop(timeout)
            },
            *shown,
        );
    }

    let mailto = support_mailto(&format!("Question about {}", SITE_NAME));

    html! {
        <aside class="support-card">
            <div class="support-header">
                <span class="support-status"></span>
                <div>
                    <h3>{"Questions? We're around."}</h3>
                    <p>{"Organisers usually reply within a day."}</p>
                </div>
            </div>
            <div class="support-thread" aria-live="polite">
                {
                    SCRIPT.iter().take(*shown).map(|line| {
                        let class = match line.speaker {
                            Speaker::Visitor => "bubble visitor",
                            Speaker::Support => "bubble support",
                        };
                        html! { <div class={class}>{line.text}</div> }
                    }).collect::<Html>()
                }
            </div>
            <a href={mailto} class="support-link">{"Contact support"}</a>
            <style>
                {r#"
                    .support-card {
                        max-width: 420px;
                        margin: 4rem auto;
                        background: rgba(26, 26, 26, 0.95);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 24px;
                        padding: 1.5rem;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                    }
                    .support-header {
                        display: flex;
                        gap: 1rem;
                        align-items: center;
                        margin-bottom: 1rem;
                    }
                    .support-header h3 {
                        color: #fff;
                        font-size: 1.1rem;
                        margin: 0;
                    }
                    .support-header p {
                        color: #888;
                        font-size: 0.85rem;
                        margin: 0.2rem 0 0;
                    }
                    .support-status {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: #4CAF50;
                        flex-shrink: 0;
                    }
                    .support-thread {
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                        min-height: 220px;
                    }
                    @keyframes bubbleIn {
                        from { transform: translateY(8px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .bubble {
                        padding: 0.7rem 1rem;
                        border-radius: 16px;
                        font-size: 0.95rem;
                        line-height: 1.4;
                        max-width: 80%;
                        animation: bubbleIn 0.4s ease-out forwards;
                    }
                    .bubble.visitor {
                        align-self: flex-end;
                        background: #1E90FF;
                        color: #fff;
                    }
                    .bubble.support {
                        align-self: flex-start;
                        background: rgba(255, 255, 255, 0.08);
                        color: #ddd;
                    }
                    .support-link {
                        display: inline-block;
                        margin-top: 1.2rem;
                        color: #7EB2FF;
                        text-decoration: none;
                    }
                "#}
            </style>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_reveals_one_line_at_a_time_then_loops() {
        let mut shown = 0;
        for expected in 1..=SCRIPT.len() {
            let (next, delay) = next_step(shown);
            assert_eq!(next, expected);
            assert_eq!(delay, LINE_DELAY_MS);
            shown = next;
        }
        assert_eq!(next_step(shown), (0, HOLD_MS));
    }

    #[test]
    fn mailto_subject_is_percent_encoded() {
        assert_eq!(
            support_mailto("Hi & bye?"),
            format!("mailto:{}?subject=Hi%20%26%20bye%3F", SUPPORT_EMAIL)
        );
    }
}

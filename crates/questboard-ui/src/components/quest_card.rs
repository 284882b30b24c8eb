//! Quest Card Component
//!
//! Landscape card showing a quest over its background image: title,
//! description, reward block and either a completion check or the expiry.

use dioxus::prelude::*;
use questboard_core::{check_completion, CardFooter, CompletionCheck, Quest, RewardSummary};

use super::CheckIcon;
use crate::context::use_completion_lookup;

/// Inline background for a card: dark-to-transparent gradient over the image.
pub fn background_style(display_image: &str) -> String {
    let url = display_image.replace('"', "%22");
    format!(
        "background-image: linear-gradient(to right, #000 40%, transparent 60%), url(\"{}\");",
        url
    )
}

/// Publish the clicked quest, then ask the parent to open its tasks.
pub fn open_quest(
    quest: &Quest,
    mut set_quest: impl FnMut(Quest),
    mut set_open_tasks: impl FnMut(bool),
) {
    set_quest(quest.clone());
    set_open_tasks(true);
}

/// Properties for the QuestCardView component
#[derive(Clone, PartialEq, Props)]
pub struct QuestCardViewProps {
    /// Quest to display
    pub quest: Quest,
    /// Whether the current user already completed the quest
    #[props(default = false)]
    pub completed: bool,
    /// Whether the parent's task drawer is showing this quest
    #[props(default = false)]
    pub open_tasks: bool,
    /// Click handler for the whole card
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
}

/// Stateless card markup.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     QuestCardView {
///         quest: quest.clone(),
///         completed: true,
///     }
/// }
/// ```
#[component]
pub fn QuestCardView(props: QuestCardViewProps) -> Element {
    let quest = &props.quest;
    let title = quest.title.clone();
    let description = quest.description.clone();
    let background = background_style(&quest.display_image);
    let summary = RewardSummary::for_reward(&quest.reward);
    let footer = CardFooter::new(props.completed, quest.expires_on);
    let open_tasks = props.open_tasks;
    let onclick = props.onclick;

    let reward_class = match &summary {
        RewardSummary::LuckyDraw { .. } => "quest-reward quest-reward--lucky-draw",
        RewardSummary::Fcfs { .. } => "quest-reward quest-reward--fcfs",
        RewardSummary::Leaderboard { .. } => "quest-reward quest-reward--leaderboard",
    };
    let headline = summary.headline();
    let detail = summary.detail();

    rsx! {
        div {
            class: "quest-card",
            role: "button",
            "aria-expanded": "{open_tasks}",
            style: "{background}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },

            h3 { class: "quest-card__title", "{title}" }
            p { class: "quest-card__description", "{description}" }

            div { class: "{reward_class}",
                if let Some(detail) = detail {
                    h4 { class: "quest-reward__headline", "{headline}" }
                    p { class: "quest-reward__detail", "{detail}" }
                } else {
                    p { class: "quest-reward__leaderboard", "{headline}" }
                }
            }

            {match footer {
                CardFooter::Completed => rsx! {
                    div { class: "quest-card__footer quest-card__footer--completed",
                        CheckIcon { size: 35 }
                    }
                },
                CardFooter::Expires(date) => rsx! {
                    p { class: "quest-card__footer quest-card__expiry",
                        "Expires on: {date}"
                    }
                },
            }}
        }
    }
}

/// Quest card that looks up its own completion status.
///
/// The lookup runs once, when the card is created; if the card is dropped
/// first the answer is discarded. Lookup failures leave the card showing its
/// expiry.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     QuestCard {
///         quest: quest.clone(),
///         open_tasks: open_tasks() && is_selected,
///         set_open_tasks: move |open| open_tasks.set(open),
///         set_quest: move |quest| selected.set(Some(quest)),
///     }
/// }
/// ```
#[component]
pub fn QuestCard(
    /// Quest data
    quest: Quest,
    /// True while the parent's drawer shows this quest
    #[props(default = false)]
    open_tasks: bool,
    /// Asks the parent to open or close the drawer
    set_open_tasks: EventHandler<bool>,
    /// Publishes the clicked quest to the parent
    set_quest: EventHandler<Quest>,
) -> Element {
    let lookup = use_completion_lookup();
    let mut completed = use_signal(|| false);
    let check = use_hook(CompletionCheck::new);

    let quest_id = quest.id.clone();
    let starter = check.clone();
    use_hook(move || {
        if let Some(token) = starter.begin() {
            spawn(async move {
                let outcome = check_completion(lookup.as_ref(), &quest_id, &token).await;
                if outcome.is_completed() {
                    tracing::debug!(quest = %quest_id, "Marking quest card completed");
                    completed.set(true);
                }
            });
        }
    });

    use_drop(move || check.cancel());

    let clicked = quest.clone();
    let handle_click = move |_| {
        open_quest(
            &clicked,
            |q| set_quest.call(q),
            |open| set_open_tasks.call(open),
        );
    };

    rsx! {
        QuestCardView {
            quest,
            completed: completed(),
            open_tasks,
            onclick: handle_click,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use futures::future::BoxFuture;
    use questboard_core::{
        CompletionLookup, QuestError, QuestId, QuestResult, Reward, RewardMethod, SharedLookup,
    };
    use dioxus_core::{ElementId, Event, Mutation};
    use dioxus_html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };
    use std::any::Any;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn quest(method: RewardMethod, expires: (i32, u32, u32)) -> Quest {
        let (y, m, d) = expires;
        Quest::new(
            "Genesis Explorer",
            "Bridge your first asset",
            "https://example.com/bg.png",
            Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
            Reward {
                method,
                amount: 42.into(),
                collection_name: "Nebula Keys".to_string(),
            },
        )
        .with_id("q-1")
    }

    fn render_view(quest: Quest, completed: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            QuestCardView,
            QuestCardViewProps {
                quest,
                completed,
                open_tasks: false,
                onclick: None,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn lucky_draw_layout() {
        let html = render_view(quest(RewardMethod::LuckyDraw, (2024, 3, 5)), false);
        assert!(html.contains("Chance to Win Nebula Keys Whitelist"));
        assert!(html.contains("Allocation 42"));
        assert!(!html.contains("to complete."));
        assert!(!html.contains("Leaderboard:"));
    }

    #[test]
    fn fcfs_layout() {
        let html = render_view(quest(RewardMethod::Fcfs, (2024, 3, 5)), false);
        assert!(html.contains("First 42 to complete."));
        assert!(html.contains("Gets Nebula Keys Whitelist"));
        assert!(!html.contains("Chance to Win"));
        assert!(!html.contains("Leaderboard:"));
    }

    #[test]
    fn unknown_method_falls_back_to_leaderboard() {
        for tag in ["", "Raffle", "luckydraw"] {
            let html = render_view(quest(RewardMethod::from_tag(tag), (2024, 3, 5)), false);
            assert!(html.contains("Leaderboard: 42 Nebula Keys"), "tag {tag:?}");
            assert!(!html.contains("Chance to Win"));
            assert!(!html.contains("to complete."));
        }
    }

    #[test]
    fn pending_card_shows_expiry() {
        let html = render_view(quest(RewardMethod::Fcfs, (2024, 3, 5)), false);
        assert!(html.contains("Expires on: 5 March 2024"));
        assert!(!html.contains("check-icon"));
    }

    #[test]
    fn completed_card_shows_check_instead_of_expiry() {
        for expires in [(2001, 1, 1), (2999, 1, 1)] {
            let html = render_view(quest(RewardMethod::Fcfs, expires), true);
            assert!(html.contains("check-icon"));
            assert!(!html.contains("Expires on"));
        }
    }

    #[test]
    fn title_description_and_background_always_rendered() {
        let html = render_view(quest(RewardMethod::LuckyDraw, (2024, 3, 5)), true);
        assert!(html.contains("Genesis Explorer"));
        assert!(html.contains("Bridge your first asset"));
        assert!(html.contains("https://example.com/bg.png"));
    }

    #[test]
    fn aria_expanded_follows_open_tasks() {
        let mut dom = VirtualDom::new_with_props(
            QuestCardView,
            QuestCardViewProps {
                quest: quest(RewardMethod::Fcfs, (2024, 3, 5)),
                completed: false,
                open_tasks: true,
                onclick: None,
            },
        );
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("aria-expanded=\"true\""));

        let html = render_view(quest(RewardMethod::Fcfs, (2024, 3, 5)), false);
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn background_style_layers_gradient_over_image() {
        let style = background_style("https://example.com/a.png");
        assert_eq!(
            style,
            "background-image: linear-gradient(to right, #000 40%, transparent 60%), url(\"https://example.com/a.png\");"
        );
        assert!(!background_style("a\"b").contains("a\"b"));
    }

    #[test]
    fn click_publishes_quest_then_opens_tasks() {
        let calls = RefCell::new(Vec::new());
        let q = quest(RewardMethod::Fcfs, (2024, 3, 5));

        open_quest(
            &q,
            |picked| calls.borrow_mut().push(format!("set_quest:{}", picked.id)),
            |open| calls.borrow_mut().push(format!("set_open_tasks:{open}")),
        );

        assert_eq!(
            calls.into_inner(),
            vec!["set_quest:q-1".to_string(), "set_open_tasks:true".to_string()]
        );
    }

    struct FixedLookup {
        calls: AtomicUsize,
        answer: Option<bool>,
    }

    impl CompletionLookup for FixedLookup {
        fn is_quest_completed<'a>(&'a self, _id: &'a QuestId) -> BoxFuture<'a, QuestResult<bool>> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                self.answer
                    .ok_or_else(|| QuestError::Lookup("offline".to_string()))
            })
        }
    }

    #[component]
    fn Harness() -> Element {
        let quest = use_context::<Quest>();
        rsx! {
            QuestCard {
                quest,
                set_open_tasks: move |_| {},
                set_quest: move |_| {},
            }
        }
    }

    async fn render_card(answer: Option<bool>) -> (String, usize) {
        let lookup = Arc::new(FixedLookup {
            calls: AtomicUsize::new(0),
            answer,
        });
        let shared: SharedLookup = lookup.clone();
        let mut dom = VirtualDom::new(Harness)
            .with_root_context(shared)
            .with_root_context(quest(RewardMethod::LuckyDraw, (2024, 3, 5)));

        dom.rebuild_in_place();
        let _ = tokio::time::timeout(Duration::from_millis(200), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();

        (dioxus_ssr::render(&dom), lookup.calls.load(Ordering::SeqCst))
    }

    #[tokio::test]
    async fn card_switches_to_check_when_lookup_says_completed() {
        let (html, calls) = render_card(Some(true)).await;
        assert_eq!(calls, 1);
        assert!(html.contains("check-icon"));
        assert!(!html.contains("Expires on"));
    }

    #[tokio::test]
    async fn card_keeps_expiry_when_incomplete() {
        let (html, calls) = render_card(Some(false)).await;
        assert_eq!(calls, 1);
        assert!(html.contains("Expires on: 5 March 2024"));
    }

    #[tokio::test]
    async fn card_keeps_expiry_when_lookup_fails() {
        let (html, calls) = render_card(None).await;
        assert_eq!(calls, 1);
        assert!(html.contains("Expires on: 5 March 2024"));
        assert!(!html.contains("check-icon"));
    }

    type CallLog = Rc<RefCell<Vec<String>>>;

    #[component]
    fn RecordingHarness() -> Element {
        let quest = use_context::<Quest>();
        let log = use_context::<CallLog>();
        let quest_log = log.clone();
        rsx! {
            QuestCard {
                quest,
                set_quest: move |picked: Quest| {
                    quest_log.borrow_mut().push(format!("set_quest:{}", picked.id));
                },
                set_open_tasks: move |open| {
                    log.borrow_mut().push(format!("set_open_tasks:{open}"));
                },
            }
        }
    }

    #[test]
    fn clicking_mounted_card_publishes_quest_then_opens_tasks() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let log: CallLog = Rc::new(RefCell::new(Vec::new()));
        let lookup: SharedLookup = Arc::new(FixedLookup {
            calls: AtomicUsize::new(0),
            answer: Some(false),
        });
        let mut dom = VirtualDom::new(RecordingHarness)
            .with_root_context(lookup)
            .with_root_context(log.clone())
            .with_root_context(quest(RewardMethod::Fcfs, (2024, 3, 5)));

        let mutations = dom.rebuild_to_vec();
        let card: ElementId = mutations
            .edits
            .iter()
            .find_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .expect("card registers a click listener");

        let click = Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            true,
        );
        dom.runtime().handle_event("click", click, card);

        assert_eq!(
            log.borrow().clone(),
            vec!["set_quest:q-1".to_string(), "set_open_tasks:true".to_string()]
        );
    }

    /// Parent renders, counted across the test
    #[derive(Clone, Default)]
    struct RenderCount(Arc<AtomicUsize>);

    struct SlowLookup {
        calls: AtomicUsize,
        delay: Duration,
        renders: RenderCount,
        renders_before_answer: AtomicUsize,
    }

    impl CompletionLookup for SlowLookup {
        fn is_quest_completed<'a>(&'a self, _id: &'a QuestId) -> BoxFuture<'a, QuestResult<bool>> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(self.delay).await;
                let seen = self.renders.0.load(Ordering::SeqCst);
                self.renders_before_answer.store(seen, Ordering::SeqCst);
                Ok(true)
            })
        }
    }

    /// Re-renders its card five times in quick succession, flipping a prop
    /// each time so the card itself re-renders too.
    #[component]
    fn RestlessParent() -> Element {
        let renders = use_context::<RenderCount>();
        renders.0.fetch_add(1, Ordering::SeqCst);

        let mut tick = use_signal(|| 0u32);
        use_hook(move || {
            spawn(async move {
                for _ in 0..5 {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    *tick.write() += 1;
                }
            })
        });

        let quest = use_context::<Quest>();
        rsx! {
            QuestCard {
                quest,
                open_tasks: tick() % 2 == 1,
                set_open_tasks: move |_| {},
                set_quest: move |_| {},
            }
        }
    }

    #[tokio::test]
    async fn lookup_runs_once_while_card_rerenders_before_answer() {
        let renders = RenderCount::default();
        let lookup = Arc::new(SlowLookup {
            calls: AtomicUsize::new(0),
            delay: Duration::from_millis(50),
            renders: renders.clone(),
            renders_before_answer: AtomicUsize::new(0),
        });
        let shared: SharedLookup = lookup.clone();
        let mut dom = VirtualDom::new(RestlessParent)
            .with_root_context(shared)
            .with_root_context(renders.clone())
            .with_root_context(quest(RewardMethod::LuckyDraw, (2024, 3, 5)));

        dom.rebuild_in_place();
        let deadline = tokio::time::Instant::now() + Duration::from_millis(300);
        while tokio::time::timeout_at(deadline, dom.wait_for_work())
            .await
            .is_ok()
        {
            dom.render_immediate_to_vec();
        }

        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
        assert!(lookup.renders_before_answer.load(Ordering::SeqCst) >= 6);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("check-icon"));
        assert!(!html.contains("Expires on"));
    }
}

use crate::{infer_page_state, Effect, Msg, PageOutcome, Phase, ScrollState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ScrollState, msg: Msg) -> (ScrollState, Vec<Effect>) {
    let effects = match msg {
        Msg::Initialize {
            location,
            prerequisites,
            signal,
        } => {
            // Inference runs once per page view; a listing without its container
            // or trigger simply stays inert.
            if state.phase() != Phase::Inert || !prerequisites.satisfied() {
                return (state, Vec::new());
            }
            let page = infer_page_state(&signal, &location);
            state.activate(location, page);
            let mut effects = vec![Effect::ObserveTrigger];
            if prerequisites.has_legacy_pagination {
                effects.push(Effect::HideLegacyPagination);
            }
            effects
        }
        Msg::TriggerIntersected { intersecting } => {
            if intersecting {
                request_more(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::ScrollSettled(metrics) => {
            let threshold = f64::from(state.policy().near_bottom_px);
            if metrics.is_near_bottom(threshold) {
                request_more(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::LoadRequested(_) => request_more(&mut state),
        Msg::PageLoaded { page, outcome } => apply_page_loaded(&mut state, page, outcome),
        Msg::HistoryNavigated => {
            let mut effects = Vec::with_capacity(2);
            if state.is_observing() {
                effects.push(Effect::DisconnectObserver);
            }
            effects.push(Effect::ReloadPage);
            state = ScrollState::with_policy(state.policy());
            effects
        }
        Msg::Teardown => {
            if state.tear_down() {
                vec![Effect::DisconnectObserver]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn request_more(state: &mut ScrollState) -> Vec<Effect> {
    if !state.can_request() {
        return Vec::new();
    }
    let Some((page, url)) = state.begin_fetch() else {
        return Vec::new();
    };

    let mut effects = Vec::with_capacity(3);
    if state.retry_visible() {
        state.set_retry(None);
        effects.push(Effect::HideRetry);
    }
    effects.push(Effect::ShowLoading);
    effects.push(Effect::FetchPage {
        page,
        url: url.to_string(),
    });
    effects
}

fn apply_page_loaded(state: &mut ScrollState, page: u32, outcome: PageOutcome) -> Vec<Effect> {
    let Some(pending) = state.finish_fetch(page) else {
        return Vec::new();
    };

    let mut effects = match outcome {
        PageOutcome::Items(items) if !items.is_empty() => {
            let count = items.len();
            let url = pending.url.to_string();
            state.advance(pending, count);
            vec![
                Effect::AppendItems { page, items },
                Effect::PushHistory { url },
                Effect::ContentAppended { page, count },
            ]
        }
        // An empty page is as final as a missing one.
        PageOutcome::Items(_) | PageOutcome::NotFound => {
            state.exhaust();
            vec![Effect::HideTrigger]
        }
        PageOutcome::Failed { reason } => {
            let message = format!("Could not load more items ({reason}). Try again.");
            state.set_retry(Some(message.clone()));
            vec![Effect::ShowRetry { message }]
        }
    };
    effects.push(Effect::HideLoading);
    effects
}

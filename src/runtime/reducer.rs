use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::app_state::AppState;
use crate::widgets::traits::InteractionResult;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Intent::Submit => vec![Effect::Submitted(state.submit()), Effect::RequestRender],
            Intent::NextFocus => {
                state.focus_next();
                vec![Effect::RequestRender]
            }
            Intent::PrevFocus => {
                state.focus_prev();
                vec![Effect::RequestRender]
            }
            Intent::InputKey(key) => {
                let result = state.dispatch_key_to_focused(key);
                collect_effects(state, result)
            }
            Intent::TextAction(action) => {
                let result = state.dispatch_text_action_to_focused(action);
                collect_effects(state, result)
            }
            Intent::Tick => vec![],
        }
    }
}

fn collect_effects(state: &mut AppState, result: InteractionResult) -> Vec<Effect> {
    let mut effects: Vec<Effect> = result
        .actions
        .into_iter()
        .filter_map(|action| state.apply_action(action))
        .map(Effect::Submitted)
        .collect();
    if result.request_render {
        effects.push(Effect::RequestRender);
    }
    effects
}

use crate::form::SubmitOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Submitted(SubmitOutcome),
    RequestRender,
}

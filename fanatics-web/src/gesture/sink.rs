//! Action sinks - whatever turns an emitted action into a key press
//!
//! The classifier never presses keys itself; callers hand each result to a
//! sink after classification.

use super::classifier::ClassifierResult;
use super::types::Action;

/// Receives emitted actions (key injection, game input, test recorder)
pub trait ActionSink {
    fn press(&mut self, action: Action);
}

impl<F: FnMut(Action)> ActionSink for F {
    fn press(&mut self, action: Action) {
        self(action)
    }
}

/// Forward the frame's emitted action, if any; returns it
pub fn dispatch<S: ActionSink + ?Sized>(result: &ClassifierResult, sink: &mut S) -> Option<Action> {
    let action = result.action?;
    sink.press(action);
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_forwards_action() {
        let mut pressed = Vec::new();
        let result = ClassifierResult {
            action: Some(Action::Down),
            ..Default::default()
        };
        let mut sink = |a: Action| pressed.push(a);
        assert_eq!(dispatch(&result, &mut sink), Some(Action::Down));
        assert_eq!(pressed, vec![Action::Down]);
    }

    #[test]
    fn test_dispatch_empty_result() {
        let mut count = 0;
        let mut sink = |_: Action| count += 1;
        assert_eq!(dispatch(&ClassifierResult::default(), &mut sink), None);
        assert_eq!(count, 0);
    }
}

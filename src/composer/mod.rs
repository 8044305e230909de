//! Prompt construction for the two generation variants.
//!
//! Composers are pure: they turn a typed request into a [`ModelRequest`]
//! carrying the persona, the ordered prompt parts and the output schema.
//! Blank topics must be rejected before a request reaches this module.

pub mod caption;
pub mod hook;

use crate::models::{GenerationRequest, ModelRequest};

pub fn compose(request: &GenerationRequest) -> ModelRequest {
    match request {
        GenerationRequest::Caption(caption) => caption::compose(caption),
        GenerationRequest::Hook(hook) => hook::compose(hook),
    }
}

/// Empty strings count as absent.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Empty and whitespace-only strings count as absent.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CaptionRequest, HookRequest};

    #[test]
    fn test_compose_dispatches_on_variant() {
        let composed_caption = compose(&GenerationRequest::Caption(CaptionRequest::new("Serum")));
        assert_eq!(composed_caption.system_instruction, caption::SYSTEM_INSTRUCTION);

        let composed_hook = compose(&GenerationRequest::Hook(HookRequest::new("Serum")));
        assert_eq!(composed_hook.system_instruction, hook::SYSTEM_INSTRUCTION);
    }

    #[test]
    fn test_presence_helpers() {
        assert_eq!(present(&Some(" ".into())), Some(" "));
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(non_blank(&Some(" \n".into())), None);
        assert_eq!(non_blank(&Some("Gen Z".into())), Some("Gen Z"));
        assert_eq!(non_blank(&None), None);
    }
}

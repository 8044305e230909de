use super::{non_blank, present};
use crate::models::{ComposedPrompt, HookRequest, ModelRequest, Part, ResponseSchema};

pub const SYSTEM_INSTRUCTION: &str = "Anda adalah seorang ahli strategi pemasaran viral berbahasa Indonesia. Respons Anda harus dalam format JSON.";

pub const CURIOSITY_CLAUSE: &str = " Hook harus membuat penasaran dan mendorong orang untuk ingin tahu lebih lanjut. Hindari kata-kata seperti 'TikTok', 'Shopee', 'harga', dan jangan membuat klaim yang berlebihan.";

const AUDIENCE_MARKER: &str = "Target audiensnya adalah";

pub fn schema() -> ResponseSchema {
    ResponseSchema::object().required_property(
        "hooks",
        ResponseSchema::array_of(ResponseSchema::string())
            .describe("Sebuah array berisi 10 ide hook."),
    )
}

/// Builds the hook prompt: base, audience (when non-blank), curiosity and
/// content constraints, then the user's stylistic details.
pub fn compose(request: &HookRequest) -> ModelRequest {
    let mut text = format!(
        "Buatkan 10 ide hook pendek yang menarik perhatian untuk postingan media sosial dalam Bahasa Indonesia. Topiknya adalah \"{}\".",
        request.topic
    );

    if let Some(audience) = non_blank(&request.audience) {
        text.push_str(&format!(" {} \"{}\".", AUDIENCE_MARKER, audience));
    }

    text.push_str(CURIOSITY_CLAUSE);

    if let Some(details) = present(&request.hook_details) {
        text.push_str(&format!(
            "\n\nBerikut adalah detail tambahan dari pengguna untuk gaya hook yang diinginkan: \"{}\".",
            details
        ));
    }

    ModelRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        prompt: ComposedPrompt {
            parts: vec![Part::Text(text)],
        },
        schema: schema(),
    }
}

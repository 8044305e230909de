use super::present;
use crate::models::{CaptionRequest, ComposedPrompt, ModelRequest, Part, ResponseSchema};

pub const SYSTEM_INSTRUCTION: &str = "Anda adalah seorang ahli pemasaran media sosial yang kreatif dan profesional berbahasa Indonesia. Respons Anda harus dalam format JSON.";

pub const CLOSING_CLAUSE: &str =
    " Pastikan caption berhubungan langsung dengan gambar dan informasi yang diberikan.";

const PRODUCT_IMAGE_CLAUSE: &str = " Sebuah gambar produk juga disediakan sebagai konteks.";
const DESCRIPTION_IMAGE_CLAUSE: &str =
    " Sebuah screenshot deskripsi produk juga disediakan sebagai konteks.";

fn base_instruction(topic: &str) -> String {
    format!(
        "Buatkan sebuah caption media sosial yang menarik dan 10 tagar yang relevan untuk postingan tentang \"{topic}\". \
Caption harus menggunakan Bahasa Indonesia yang natural dan menyertakan emoji yang relevan (seperti ✅, ✨, 🚀, dll) untuk membuatnya lebih menarik secara visual.\n  \n\
PENTING:\n\
- JANGAN sebutkan kata-kata seperti 'TikTok', 'Shopee', atau platform e-commerce/media sosial spesifik lainnya.\n\
- JANGAN sebutkan 'harga' atau informasi sensitif terkait biaya.\n\
- JANGAN membuat klaim yang berlebihan atau tidak terbukti (hindari over-claim). Fokus pada manfaat dan keunikan produk.\n  "
    )
}

pub fn schema() -> ResponseSchema {
    ResponseSchema::object()
        .required_property(
            "caption",
            ResponseSchema::string().describe("Caption media sosial yang dihasilkan."),
        )
        .required_property(
            "hashtags",
            ResponseSchema::array_of(ResponseSchema::string())
                .describe("Sebuah array berisi 10 tagar yang relevan."),
        )
}

/// Builds the caption prompt. Images are attached in the order product
/// image, description image; the text part always comes last.
pub fn compose(request: &CaptionRequest) -> ModelRequest {
    let mut parts = Vec::new();
    let mut text = base_instruction(&request.topic);

    if let Some(description) = present(&request.description_text) {
        text.push_str(&format!(" Deskripsi produknya adalah: \"{}\".", description));
    }

    if let Some(custom) = present(&request.custom_request) {
        text.push_str(&format!(
            "\n\nBerikut adalah permintaan khusus dari pengguna yang harus kamu ikuti: \"{}\".",
            custom
        ));
    }

    if let Some(image) = &request.product_image {
        text.push_str(PRODUCT_IMAGE_CLAUSE);
        parts.push(Part::Image(image.clone()));
    }

    if let Some(image) = &request.description_image {
        text.push_str(DESCRIPTION_IMAGE_CLAUSE);
        parts.push(Part::Image(image.clone()));
    }

    text.push_str(CLOSING_CLAUSE);
    parts.push(Part::Text(text));

    ModelRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        prompt: ComposedPrompt { parts },
        schema: schema(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InlineImage;

    fn image(tag: &str) -> InlineImage {
        InlineImage::new("image/png", tag)
    }

    #[test]
    fn test_topic_only() {
        let composed = compose(&CaptionRequest::new("Promo skincare"));
        let text = composed.prompt.text();

        assert!(text.contains("\"Promo skincare\""));
        assert!(text.ends_with(CLOSING_CLAUSE));
        assert!(text.contains("PENTING:"));
        assert!(text.contains("'TikTok', 'Shopee'"));
        assert!(text.contains("'harga'"));
        assert!(text.contains("over-claim"));
        assert!(composed.prompt.images().is_empty());
        assert_eq!(composed.prompt.parts.len(), 1);
        assert_eq!(composed.system_instruction, SYSTEM_INSTRUCTION);
    }

    #[test]
    fn test_base_instruction_keeps_template_whitespace() {
        let text = compose(&CaptionRequest::new("Serum")).prompt.text();
        assert!(text.contains("secara visual.\n  \nPENTING:\n- JANGAN"));
        assert!(text.contains("keunikan produk.\n   Pastikan caption"));

        let text = compose(&CaptionRequest::new("Serum").with_description_text("Ringan"))
            .prompt
            .text();
        assert!(text.contains("keunikan produk.\n   Deskripsi produknya adalah: \"Ringan\"."));
    }

    #[test]
    fn test_description_text_adds_one_clause_and_no_images() {
        let request = CaptionRequest::new("Serum").with_description_text("Mencerahkan kulit");
        let composed = compose(&request);
        let text = composed.prompt.text();

        assert_eq!(text.matches("Deskripsi produknya adalah").count(), 1);
        assert!(text.contains("\"Mencerahkan kulit\""));
        assert!(composed.prompt.images().is_empty());
    }

    #[test]
    fn test_empty_optional_strings_are_ignored() {
        let request = CaptionRequest::new("Serum")
            .with_description_text("")
            .with_custom_request("");
        let text = compose(&request).prompt.text();

        assert!(!text.contains("Deskripsi produknya adalah"));
        assert!(!text.contains("permintaan khusus"));
    }

    #[test]
    fn test_description_image_alone() {
        let request = CaptionRequest::new("Serum").with_description_image(image("desc"));
        let composed = compose(&request);
        let text = composed.prompt.text();

        assert_eq!(text.matches(DESCRIPTION_IMAGE_CLAUSE).count(), 1);
        assert!(!text.contains(PRODUCT_IMAGE_CLAUSE));
        assert_eq!(composed.prompt.images(), vec![&image("desc")]);
    }

    #[test]
    fn test_both_images_product_first_text_last() {
        let request = CaptionRequest::new("Serum")
            .with_description_image(image("desc"))
            .with_product_image(image("product"));
        let composed = compose(&request);

        assert_eq!(composed.prompt.parts.len(), 3);
        assert_eq!(composed.prompt.parts[0], Part::Image(image("product")));
        assert_eq!(composed.prompt.parts[1], Part::Image(image("desc")));
        assert!(matches!(composed.prompt.parts[2], Part::Text(_)));

        let text = composed.prompt.text();
        let product_at = text.find(PRODUCT_IMAGE_CLAUSE).unwrap();
        let desc_at = text.find(DESCRIPTION_IMAGE_CLAUSE).unwrap();
        assert!(product_at < desc_at);
        assert!(text.ends_with(CLOSING_CLAUSE));
    }

    #[test]
    fn test_clause_order() {
        let request = CaptionRequest::new("Serum")
            .with_description_text("Ringan")
            .with_custom_request("Pakai gaya lucu")
            .with_product_image(image("product"));
        let text = compose(&request).prompt.text();

        let description_at = text.find("Deskripsi produknya adalah").unwrap();
        let custom_at = text.find("\"Pakai gaya lucu\"").unwrap();
        let product_at = text.find(PRODUCT_IMAGE_CLAUSE).unwrap();
        let closing_at = text.find(CLOSING_CLAUSE).unwrap();

        assert!(description_at < custom_at);
        assert!(custom_at < product_at);
        assert!(product_at < closing_at);
    }

    #[test]
    fn test_schema_requires_caption_and_hashtags() {
        let schema = compose(&CaptionRequest::new("Serum")).schema;
        assert_eq!(schema.required, vec!["caption", "hashtags"]);
        assert!(schema.properties["hashtags"].items.is_some());
    }
}

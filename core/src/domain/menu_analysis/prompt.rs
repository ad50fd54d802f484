use crate::domain::menu_analysis::value_objects::VisionPrompt;

const MENU_ANALYSIS_INSTRUCTIONS: &str = "\
You are a dietitian specialised in the low-FODMAP diet. Analyze the restaurant menu in the image.
For every dish you can identify, return an object with exactly these fields:
- \"name\": the dish name as written on the menu
- \"description\": a short description of the dish and its main ingredients
- \"fodmapLevel\": one of \"low\", \"moderate\" or \"high\"
- \"concerns\": an array of ingredients likely to be high in FODMAPs
- \"alternatives\": an array of modifications that would make the dish more FODMAP friendly

Respond with a JSON array of these objects and nothing else.";

const MENU_ANALYSIS_EXAMPLE: &str = r#"Example response:
[
  {
    "name": "Margherita Pizza",
    "description": "Wheat crust, tomato sauce, mozzarella and basil",
    "fodmapLevel": "high",
    "concerns": ["Wheat crust", "Garlic in tomato sauce"],
    "alternatives": ["Gluten-free crust", "Ask for garlic-free sauce"]
  }
]"#;

/// Builds the single multimodal prompt for a menu photo. The URL is embedded
/// as is; rejecting empty or malformed URLs is left to the caller.
pub fn build_menu_prompt(image_url: &str) -> VisionPrompt {
    VisionPrompt {
        instructions: format!("{MENU_ANALYSIS_INSTRUCTIONS}\n\n{MENU_ANALYSIS_EXAMPLE}"),
        image_url: image_url.to_string(),
    }
}

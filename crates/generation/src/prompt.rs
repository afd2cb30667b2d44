//! Prompt assembly for site generation
//!
//! Maps the structured request vocabulary (business type, features, goal,
//! style) onto natural-language template fragments and assembles the full
//! request prompt, the system prompt, and the response-format suffix.

use crate::types::{Feature, Goal, SiteRequest, Style};

/// Builds model prompts from validated site requests
#[derive(Debug, Default, Clone)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    fn style_description(style: Style) -> &'static str {
        match style {
            Style::Modern => "modern and elegant with gradients and subtle effects",
            Style::Minimalist => "minimalist with generous whitespace and clear typography",
            Style::Classic => "classic and professional with rounded borders",
            Style::Colorful => "colorful and vibrant with bold color palettes",
        }
    }

    fn feature_description(feature: Feature) -> &'static str {
        match feature {
            Feature::ShowProducts => "include a product section with images and prices",
            Feature::Catalog => "include a simple catalog with categories",
            Feature::Whatsapp => "add floating WhatsApp buttons",
            Feature::Appointments => "integrate a simple appointment booking flow",
            Feature::ContactForm => "add a working contact form",
            Feature::Hours => "show opening hours",
            Feature::Location => "embed a Google Maps location",
        }
    }

    fn goal_description(goal: Goal) -> &'static str {
        match goal {
            Goal::Sell => "focused on sales conversions",
            Goal::Messages => "optimized for generating contact messages",
            Goal::AppointmentsGoal => "centered on booking appointments",
            Goal::Information => "focused on presenting clear information",
        }
    }

    /// Assemble the full request prompt for a site request
    pub fn build(&self, request: &SiteRequest) -> String {
        let features = request
            .features
            .iter()
            .map(|f| Self::feature_description(*f))
            .collect::<Vec<_>>()
            .join(", ");
        let style = Self::style_description(request.style);
        let goal = Self::goal_description(request.goal);
        let business = request.business_type.as_str();

        format!(
            "You are an expert frontend developer. Generate a COMPLETE website for a {business} business.\n\
             \n\
             SPECIFIC REQUIREMENTS:\n\
             1. PRIMARY GOAL: {goal}\n\
             2. STYLE: {style}\n\
             3. REQUIRED FEATURES: {features}\n\
             4. RESPONSIVE: must look good on phones, tablets and desktop\n\
             \n\
             TECHNICAL INSTRUCTIONS:\n\
             - Use semantic HTML5 (header, main, section, footer)\n\
             - Modern CSS with Flexbox/Grid\n\
             - Vanilla JavaScript only for essential interactions\n\
             - Include explanatory comments\n\
             - Use Font Awesome for icons (CDN included)\n\
             - Color palette coherent with the style\n\
             - Appropriate Google Fonts\n\
             \n\
             CONSTRAINTS:\n\
             - No frameworks (React, Vue, etc.)\n\
             - No external libraries except Font Awesome\n\
             - Keep the code simple but effective\n\
             \n\
             RESPONSE FORMAT:\n\
             Return EXACTLY this JSON shape:\n\
             {{\n\
               \"html\": \"complete HTML code here\",\n\
               \"css\": \"complete CSS code here\",\n\
               \"js\": \"complete JavaScript code here\"\n\
             }}\n\
             \n\
             Now generate the code for a {business} business that needs {features}, \
             with the goal {goal} and a {style} style.{suffix}",
            business = business,
            goal = goal,
            style = style,
            features = features,
            suffix = Self::format_suffix(),
        )
    }

    /// System prompt sent alongside every request
    pub fn system_prompt(&self) -> String {
        "You are an AI assistant specialized in generating clean, working web code.\n\
         \n\
         YOUR RESPONSIBILITIES:\n\
         1. Generate valid semantic HTML5\n\
         2. Write responsive CSS with Flexbox/Grid\n\
         3. Write basic JavaScript for interactions\n\
         4. Include explanatory comments\n\
         5. Stay compatible with modern browsers\n\
         \n\
         RESTRICTIONS:\n\
         - Do NOT use frameworks (React, Vue, Angular)\n\
         - Do NOT use external libraries (except Font Awesome via CDN)\n\
         - Do NOT include dangerous code (eval, unsafe innerHTML)\n\
         - KEEP the code simple and educational\n\
         \n\
         SUGGESTED COLOR PALETTE:\n\
         - Primary: #4361ee\n\
         - Secondary: #7209b7\n\
         - Success: #4cc9f0\n\
         - Danger: #f72585\n\
         - Background: #f8f9fa\n\
         \n\
         Now generate professional web code."
            .to_string()
    }

    /// Suffix that pins the expected fenced-block output order.
    ///
    /// Weaker models ignore the JSON format request; this gives the
    /// markdown-fence fallback extractor a predictable shape to match.
    fn format_suffix() -> &'static str {
        "\n\nIMPORTANT: Your response MUST contain EXACTLY three code blocks in this order:\n\
         1. HTML block (between ```html and ```)\n\
         2. CSS block (between ```css and ```)\n\
         3. JavaScript block (between ```javascript and ```)"
    }
}

//! Industry guidance table.

use linkwise_core::Industry;

/// Returned for any industry label outside the table.
pub const DEFAULT_GUIDANCE: &str = "General industry guidance.";

/// Guidance snippet for a known industry.
pub fn guidance_for(industry: Industry) -> &'static str {
    match industry {
        Industry::Tech => "Fast-paced, emphasize technical skills, adaptability, innovation.",
        Industry::FinancialServices => {
            "Focus on analytical skills, attention to detail, financial regulations."
        }
        Industry::Healthcare => "Highlight empathy, patient care, medical practices knowledge.",
        Industry::MarketingAndAdvertising => {
            "Emphasize creativity, communication, market trends."
        }
        Industry::Construction => {
            "Value safety, project management, technical building expertise."
        }
        Industry::Education => {
            "Focus on teaching methods, student engagement, curriculum development."
        }
        Industry::Retail => {
            "Emphasize customer service, sales techniques, inventory management."
        }
    }
}

/// Look up guidance by label, falling back to [`DEFAULT_GUIDANCE`].
pub fn industry_guidance(label: &str) -> &'static str {
    Industry::parse(label).map_or(DEFAULT_GUIDANCE, guidance_for)
}

//! LLM prompt for card extraction.
//!
//! The prompt pins down the JSON contract the model must answer with. The
//! normalizer tolerates deviations from it (strings instead of lists,
//! fenced output, stray fields), so the wording can change without code
//! changes.

/// Prompt sent with each card image.
pub const CARD_EXTRACTION_PROMPT: &str = r#"Extract the contact information printed on this visiting card image.
Return ONLY a JSON object. No explanations, no markdown.

Rules:
1. Extract only text that is actually visible on the card. Never guess or invent values.
2. Do not infer anything from logos or icons alone; the text must be written.
3. Decode any QR code and use the website or social media URLs it contains.
4. If the image is not a visiting card, return null for every field.
5. Use null, never an empty string, for anything that is missing.

{
  "company_name": ["Company Name\nTagline or subtitle"] or null,
  "company_quote": null,
  "person_name": ["Full Name"] or null,
  "contact_numbers": ["phone number"] or null,
  "email_addresses": ["email@example.com"] or null,
  "address": "full postal address" or null,
  "services": ["service offered"] or null,
  "website": ["https://example.com"] or null,
  "category": "one business category, e.g. Healthcare, Technology, Education" or null,
  "social_media_profiles": {
    "facebook": "URL" or null,
    "instagram": "URL" or null,
    "linkedin": "URL" or null,
    "twitter": "URL" or null,
    "youtube": "URL" or null,
    "other": ["any other social media URL"] or null
  }
}

Field notes:
- company_name: join each company name with its tagline or slogan using "\n". Several companies on one card are separate entries.
- company_quote: always null; taglines belong in company_name.
- category: exactly one string, never a list."#;

//! Advice generation: prompt rendering and positional parsing of the
//! model's free-text reply.

use crate::error::AppError;
use crate::models::{AdviceResponse, SymptomQuery};
use crate::services::providers::{ChatMessage, ChatProvider, GenerationParams};
use anyhow::anyhow;
use std::sync::Arc;

const SYSTEM_PROMPT: &str = "You are an experienced medical doctor. A patient has described their symptoms to you.
Provide general medical advice and recommendations based on the symptoms provided.
Always recommend consulting with a healthcare professional in person for proper diagnosis.
Your response should include:
1. Possible conditions that might match these symptoms
2. General recommendations (3-5)
3. Precautions to take
4. When to seek immediate medical attention";

#[derive(Clone)]
pub struct AdvisorService {
    provider: Arc<dyn ChatProvider>,
    params: GenerationParams,
}

impl AdvisorService {
    pub fn new(provider: Arc<dyn ChatProvider>, temperature: f32) -> Self {
        Self {
            provider,
            params: GenerationParams {
                temperature: Some(temperature),
                max_tokens: None,
            },
        }
    }

    /// Render the prompt, run the completion and split the reply into the
    /// three advice fields. Any provider or parse failure surfaces as a
    /// generic processing error.
    pub async fn get_medical_advice(
        &self,
        query: &SymptomQuery,
    ) -> Result<AdviceResponse, AppError> {
        let messages = build_messages(query);

        tracing::debug!(
            symptoms_len = query.symptoms.len(),
            num_recommendations = query.num_recommendations,
            "Requesting advice completion"
        );

        let response = self
            .provider
            .complete(&messages, &self.params)
            .await
            .map_err(|e| AppError::InternalError(anyhow!(e.to_string())))?;

        let text = response
            .text
            .ok_or_else(|| AppError::InternalError(anyhow!("Model returned an empty completion")))?;

        parse_advice(&text)
    }
}

fn build_messages(query: &SymptomQuery) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!(
            "Patient Symptoms: {}\nPatient History: {}\nCurrent Medications: {}\nPlease provide {} recommendations.",
            query.symptoms,
            query.patient_history,
            query.current_medications,
            query.num_recommendations
        )),
    ]
}

/// Split the completion on blank lines: paragraph 0 is the advice verbatim,
/// while paragraphs 1 and 2 contribute their lines after the first as the
/// recommendation and precaution lists. Anything shorter is an error, never
/// a partial response.
fn parse_advice(text: &str) -> Result<AdviceResponse, AppError> {
    let paragraphs: Vec<&str> = text.split("\n\n").collect();

    if paragraphs.len() < 3 {
        return Err(AppError::InternalError(anyhow!(
            "Model response has {} paragraph(s), expected at least 3",
            paragraphs.len()
        )));
    }

    Ok(AdviceResponse {
        recommendations: section_items(paragraphs[1]),
        advice: paragraphs[0].to_string(),
        precautions: section_items(paragraphs[2]),
    })
}

/// Lines of a section paragraph after its heading line.
fn section_items(paragraph: &str) -> Vec<String> {
    paragraph.split('\n').skip(1).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_response_splits_positionally() {
        let text =
            "See a doctor.\n\nRecommendations:\nRest\nHydrate\n\nPrecautions:\nAvoid cold drinks";

        let advice = parse_advice(text).unwrap();

        assert_eq!(advice.advice, "See a doctor.");
        assert_eq!(advice.recommendations, vec!["Rest", "Hydrate"]);
        assert_eq!(advice.precautions, vec!["Avoid cold drinks"]);
    }

    #[test]
    fn extra_paragraphs_beyond_the_third_are_ignored() {
        let text = "Advice here.\n\nRecommendations:\nOne\nTwo\n\nPrecautions:\nThree\n\nWhen to seek help:\nImmediately";

        let advice = parse_advice(text).unwrap();

        assert_eq!(advice.advice, "Advice here.");
        assert_eq!(advice.recommendations, vec!["One", "Two"]);
        assert_eq!(advice.precautions, vec!["Three"]);
    }

    #[test]
    fn two_paragraph_response_is_an_error() {
        let text = "Advice only.\n\nRecommendations:\nRest";
        assert!(parse_advice(text).is_err());
    }

    #[test]
    fn single_paragraph_response_is_an_error() {
        assert!(parse_advice("Just advice, no structure").is_err());
    }

    #[test]
    fn section_with_only_a_heading_yields_no_items() {
        let text = "Advice.\n\nRecommendations:\n\nPrecautions:\nStay warm";

        let advice = parse_advice(text).unwrap();

        assert!(advice.recommendations.is_empty());
        assert_eq!(advice.precautions, vec!["Stay warm"]);
    }

    #[test]
    fn prompt_interpolates_query_fields() {
        let query = SymptomQuery {
            symptoms: "fever and cough".to_string(),
            patient_history: "asthma".to_string(),
            current_medications: "salbutamol".to_string(),
            num_recommendations: 4,
        };

        let messages = build_messages(&query);

        assert_eq!(messages.len(), 2);
        assert!(messages[0].content.contains("experienced medical doctor"));
        assert!(messages[1].content.contains("Patient Symptoms: fever and cough"));
        assert!(messages[1].content.contains("Patient History: asthma"));
        assert!(messages[1].content.contains("Current Medications: salbutamol"));
        assert!(messages[1].content.contains("Please provide 4 recommendations."));
    }
}

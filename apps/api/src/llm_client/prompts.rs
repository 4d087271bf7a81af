// Prompt fragments for the resume assistant.
// The resume is compiled into the binary; it is not configurable at runtime.

/// Persona sentence that opens every system prompt.
pub const PERSONA: &str = "You are a helpful and professional AI assistant representing \
    Kshitiz Sikriwal. Answer questions based on his background. \
    Keep answers concise and friendly.";

/// Resume text the assistant answers from.
pub const RESUME: &str = include_str!("../../data/resume.txt");

/// Builds the system message: persona first, then the resume.
pub fn system_prompt(resume: &str) -> String {
    format!("{PERSONA} Resume info: {resume}")
}

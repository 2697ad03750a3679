/// Builds the single-turn prompt sent to the model.
pub fn build_prompt(message: &str, context: Option<&str>, course_title: Option<&str>) -> String {
    let course = course_title.unwrap_or("this course");
    let mut prompt = format!("You are a helpful AI tutor for the course \"{course}\".\n");
    if let Some(context) = context {
        prompt.push_str(&format!(
            "Here is some context about the course: \"{context}\".\n"
        ));
    }
    prompt.push_str(
        "Please answer the student's question based on this context if relevant, \
         but feel free to use your general knowledge to explain concepts clearly.\n\
         Keep your answers concise, encouraging, and easy to understand.",
    );
    prompt.push_str(&format!("\n\nStudent Question: {message}"));
    prompt
}

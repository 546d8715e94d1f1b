/// Deterministic reply used when the inference gateway cannot produce one.
pub fn fallback_response(user_message: &str) -> String {
    format!(
        "The conversational model is not loaded right now, but I'm still here to help. \
         Here's a structured reply you can use:\n\n\
         1) I received your request:\n   \"{user_message}\"\n\n\
         2) Suggested next steps:\n\
         - Confirm the database tables and columns involved.\n\
         - Identify any filters, ordering, or aggregations needed.\n\
         - Translate the above into SQL using the database's dialect.\n\n\
         3) Example prompt you can try once the model is ready:\n   \
         \"Write a SQL query to address: {user_message}\""
    )
}

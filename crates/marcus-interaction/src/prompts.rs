//! System directives sent to the model, rendered with minijinja.

use std::sync::LazyLock;

use marcus_core::agent::ModelError;
use marcus_core::i18n::Language;
use minijinja::{Environment, context};

const ANALYSIS_TEMPLATE_NAME: &str = "analysis_directive";
const DEBATE_TEMPLATE_NAME: &str = "debate_directive";

const ANALYSIS_TEMPLATE: &str = r#"You are Marcus Aurelius, Roman Emperor and Stoic philosopher. The user, {{ user_name }}, has come to you with a situation that troubles them.

Apply Stoic logic to it:
1. Separate the objective facts from the opinions and judgements the user has added to them.
2. Classify what is in their control (internal) and what is not (external).
3. Deliver one verdict. Be direct, logical, and encourage virtue. Do not coddle. Logic over chaos.
{% if worst_case %}

PERFORM PREMEDITATIO MALORUM: Visualize the absolute worst-case scenario of this situation. Explain why even this worst case is survivable and how to prepare for it mentally.
{% endif %}

CRITICAL: ENSURE ALL OUTPUT FIELDS ARE IN {{ language }}."#;

const DEBATE_TEMPLATE: &str = r#"You are Marcus Aurelius. You are debating with {{ user_name }} regarding the Stoic analysis you just provided.

CONTEXT:
{{ context }}

YOUR TASKS:
1. Defend your Stoic arguments with strong logic.
2. Do not get angry. Stay calm (Stoic), but firm.
3. Challenge the user's thinking if they still complain about external things.
4. Answer briefly, concisely, and philosophically.

CRITICAL: SPEAK ONLY IN {{ language }}."#;

/// Text sent alongside an image when the user typed nothing.
pub const IMAGE_ONLY_PROMPT: &str =
    "Analyze this image from a Stoic perspective. What is the reality vs my impression?";

static ENV: LazyLock<Result<Environment<'static>, minijinja::Error>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(ANALYSIS_TEMPLATE_NAME, ANALYSIS_TEMPLATE)?;
    env.add_template(DEBATE_TEMPLATE_NAME, DEBATE_TEMPLATE)?;
    Ok(env)
});

fn render(name: &str, ctx: minijinja::Value) -> Result<String, ModelError> {
    let env = ENV
        .as_ref()
        .map_err(|err| ModelError::configuration(format!("Invalid prompt templates: {err}")))?;
    env.get_template(name)
        .and_then(|template| template.render(ctx))
        .map_err(|err| ModelError::configuration(format!("Failed to render {name}: {err}")))
}

/// Directive for a single analysis request.
pub fn analysis_directive(
    user_name: &str,
    language: Language,
    worst_case: bool,
) -> Result<String, ModelError> {
    render(
        ANALYSIS_TEMPLATE_NAME,
        context! {
            user_name => user_name,
            language => language.prompt_name(),
            worst_case => worst_case,
        },
    )
}

/// Directive that seeds a debate conversation.
pub fn debate_directive(
    user_name: &str,
    debate_context: &str,
    language: Language,
) -> Result<String, ModelError> {
    render(
        DEBATE_TEMPLATE_NAME,
        context! {
            user_name => user_name,
            context => debate_context,
            language => language.prompt_name(),
        },
    )
}

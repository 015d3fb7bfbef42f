//! Prompt builders for the briefing pipelines.
//!
//! Every prompt is assembled from the same four parts: a language-selected
//! instruction, a context block quoting profession/sector/task verbatim, the
//! shared style directive, and the verbatim text of whatever upstream fields
//! the step builds on. Builders are pure; nothing here validates, escapes,
//! or truncates.

use crate::briefing::pipeline::BriefingRecord;
use crate::llm_client::prompts::STYLE_DIRECTIVE;

/// Picks the Spanish template when the language code is "es", the English
/// one otherwise. Unrecognized codes fall back to English; this is
/// documented behavior, not an error.
pub fn lang_select<'a>(lang: &str, es: &'a str, en: &'a str) -> &'a str {
    if lang == "es" {
        es
    } else {
        en
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Instruction templates (es / en pairs)
// ────────────────────────────────────────────────────────────────────────────

const NEWS_ES: &str = "Sos un analista de IA. Extraé las 3–5 noticias más recientes sobre IA \
    (OpenAI, Anthropic, DeepMind, open-source, adopción enterprise) relevantes para el \
    profesional descripto abajo. Redactá en lenguaje claro y útil, sin inventar.";
const NEWS_EN: &str = "You are an AI analyst. Extract 3–5 of the most recent AI news items \
    (OpenAI, Anthropic, DeepMind, open-source, enterprise adoption) relevant to the \
    professional described below. Write clearly and practically, no fabrication.";

const MEANING_ES: &str = "Sos un coach de carrera. Explicá cómo cada noticia representa una \
    oportunidad real para el profesional descripto abajo, dentro de su sector.";
const MEANING_EN: &str = "You are a career coach. Explain how each news item becomes a real \
    opportunity for the professional described below, within their sector.";

const ACTION_ES: &str = "Proponé UNA micro-acción diaria (≤15 min) que acerque al profesional \
    descripto abajo a oportunidades globales. Debe ser concreta y ejecutable hoy (ej.: post \
    corto en LinkedIn, DM, pitch, probar un repo).";
const ACTION_EN: &str = "Suggest ONE daily micro-action (≤15 min) that brings the professional \
    described below closer to global opportunities. Must be concrete and executable today \
    (e.g., short LinkedIn post, DM, pitch snippet, test a repo).";

const LINKEDIN_ES: &str = "Generá 2 posts de LinkedIn (uno en español y uno en inglés) a partir \
    del material de abajo. Estilo: con autoridad, inspirador, no egocéntrico. Objetivo: atraer \
    leads entrantes de alto valor.";
const LINKEDIN_EN: &str = "Generate 2 LinkedIn posts (one in English and one in Spanish) from \
    the material below. Style: authoritative, inspiring, not egocentric. Goal: attract inbound \
    high-value leads.";

const POC_ES: &str = "Generá 3 ideas de POC simples (45 min) conectadas a las noticias de abajo \
    y adecuadas al perfil descripto. Ej.: API + LLM, middleware de seguridad, extractor de \
    facturas, workflow agent.";
const POC_EN: &str = "Generate 3 simple POC ideas (45 min) connected to the news below and \
    suited to the profile described. Ex.: API + LLM, safety middleware, invoice extractor, \
    workflow agent.";

const COMPOUNDING_ES: &str = "Explicá cómo el post de LinkedIn, la acción diaria y los POCs de \
    abajo se acumulan estratégicamente hacia oportunidades globales de consultoría.";
const COMPOUNDING_EN: &str = "Explain how the LinkedIn post, the daily action, and the POCs \
    below strategically compound toward global consulting opportunities.";

const FINAL_SUMMARY_ES: &str = "Escribí el resumen final de la lectura de hoy, uniendo las \
    noticias, las oportunidades, la acción diaria, el post de LinkedIn, los POCs y la narrativa \
    de compounding de abajo en un cierre breve y accionable.";
const FINAL_SUMMARY_EN: &str = "Write the final summary of today's reading, tying the news, the \
    opportunities, the daily action, the LinkedIn post, the POCs, and the compounding narrative \
    below into a short, actionable close.";

const TITLE_ES: &str = "Escribí UN título de blog atractivo para el briefing de hoy del \
    profesional descripto abajo. Devolvé solo el título, sin comillas.";
const TITLE_EN: &str = "Write ONE compelling blog title for today's briefing for the \
    professional described below. Return the title only, without quotes.";

const INTRO_SUMMARY_ES: &str = "Escribí un resumen teaser de 2–3 oraciones del briefing de hoy \
    para el profesional descripto abajo, pensado para la vista previa de un blog.";
const INTRO_SUMMARY_EN: &str = "Write a 2–3 sentence teaser summary of today's briefing for \
    the professional described below, meant for a blog preview.";

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

fn context_block(record: &BriefingRecord) -> String {
    format!(
        "Profession: {}\nSector: {}\nTask: {}",
        record.profession, record.sector, record.task
    )
}

fn assemble(instruction: &str, record: &BriefingRecord, upstream: &[(&str, &str)]) -> String {
    let mut prompt = format!(
        "{instruction}\n\n{}\n\n{STYLE_DIRECTIVE}",
        context_block(record)
    );
    for (label, text) in upstream {
        prompt.push_str(&format!("\n\n{label}:\n{text}"));
    }
    prompt
}

// ────────────────────────────────────────────────────────────────────────────
// Step prompts
// ────────────────────────────────────────────────────────────────────────────

pub fn news_prompt(record: &BriefingRecord) -> String {
    assemble(lang_select(&record.lang, NEWS_ES, NEWS_EN), record, &[])
}

pub fn meaning_prompt(record: &BriefingRecord) -> String {
    assemble(
        lang_select(&record.lang, MEANING_ES, MEANING_EN),
        record,
        &[("News", &record.news)],
    )
}

pub fn action_prompt(record: &BriefingRecord) -> String {
    assemble(lang_select(&record.lang, ACTION_ES, ACTION_EN), record, &[])
}

pub fn linkedin_prompt(record: &BriefingRecord) -> String {
    assemble(
        lang_select(&record.lang, LINKEDIN_ES, LINKEDIN_EN),
        record,
        &[
            ("News", &record.news),
            ("Meaning", &record.meaning),
            ("Daily action", &record.action),
        ],
    )
}

pub fn poc_prompt(record: &BriefingRecord) -> String {
    assemble(
        lang_select(&record.lang, POC_ES, POC_EN),
        record,
        &[("News", &record.news)],
    )
}

pub fn compounding_prompt(record: &BriefingRecord) -> String {
    assemble(
        lang_select(&record.lang, COMPOUNDING_ES, COMPOUNDING_EN),
        record,
        &[
            ("Daily action", &record.action),
            ("LinkedIn post", &record.linkedin_post),
            ("POC ideas", &record.poc_ideas),
        ],
    )
}

pub fn final_summary_prompt(record: &BriefingRecord) -> String {
    assemble(
        lang_select(&record.lang, FINAL_SUMMARY_ES, FINAL_SUMMARY_EN),
        record,
        &[
            ("News", &record.news),
            ("Meaning", &record.meaning),
            ("Daily action", &record.action),
            ("LinkedIn post", &record.linkedin_post),
            ("POC ideas", &record.poc_ideas),
            ("Compounding", &record.compounding),
        ],
    )
}

pub fn title_prompt(record: &BriefingRecord) -> String {
    assemble(lang_select(&record.lang, TITLE_ES, TITLE_EN), record, &[])
}

pub fn intro_summary_prompt(record: &BriefingRecord) -> String {
    assemble(
        lang_select(&record.lang, INTRO_SUMMARY_ES, INTRO_SUMMARY_EN),
        record,
        &[],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! Prompt templates for meeting artifact generation
//!
//! Templates are process-wide constants rendered by placeholder substitution.
//! Substituted content is inserted verbatim and never validated or escaped.
//! The email and brief templates take only the already-generated summary,
//! never the original notes, so derived artifacts stay consistent with the
//! summary and total prompt size stays bounded.

/// Prompt catalog for the summarizer
pub struct PromptTemplates;

impl PromptTemplates {
    /// Fixed system prompt sent with every completion call
    pub fn system() -> &'static str {
        r#"You are an expert executive assistant and project manager with 10+ years of experience.

Your specialties:
- Extracting key decisions from discussions
- Identifying action items with precision
- Flagging risks and blockers
- Writing clear, actionable summaries

Your communication style:
- Professional and concise
- Action-oriented
- Uses structured formats
- Never adds information not present in the notes

You understand that meeting notes can be messy, incomplete, or informal.
You work with what you have and flag missing information when critical."#
    }

    /// Template for the structured meeting summary
    pub fn summary() -> &'static str {
        r#"Transform these meeting notes into a comprehensive, structured summary.

MEETING NOTES:
{notes}

Generate a summary with these sections:

# MEETING SUMMARY
**Date:** {date}
**Topic:** [Extract or infer from notes]

---

## 📋 EXECUTIVE SUMMARY
[2-3 sentences capturing: what was discussed, what was decided, what happens next.
Written for someone who wasn't there. Focus on business impact.]

---

## ✅ KEY DECISIONS
[List major decisions made, with brief context of why each matters.
Format: "Decision - Why it matters / Context"
If no decisions were made, state: "No major decisions - discussion/planning phase"]

---

## 🎯 ACTION ITEMS

**High Priority (Urgent/Blocking):**
- [ ] [Task description] - **@[Owner if mentioned]** - Due: [Date if mentioned]

**Medium Priority:**
- [ ] [Task description] - **@[Owner if mentioned]** - Due: [Date if mentioned]

**Low Priority / Follow-up:**
- [ ] [Task description] - **@[Owner if mentioned]** - Due: [Date if mentioned]

**⚠️ Missing Information:**
- [ ] [Tasks where owner or deadline is unclear]

[If no action items, state: "No action items identified"]

---

## 🚨 RISKS & BLOCKERS

**Risks Identified:**
- [Risk description] - Severity: [High/Medium/Low] - [Mitigation if discussed]

**Current Blockers:**
- [Blocker description] - [Who can unblock if known]

[If none, state: "No risks or blockers identified"]

---

## 💡 KEY DISCUSSION POINTS

[Capture main topics discussed, organized by theme if possible.
Include important context, concerns raised, or questions that came up.
Keep it concise - this is NOT a transcript.]

---

## 📅 NEXT STEPS

**Immediate (This Week):**
- [What needs to happen immediately]

**Short-term (Next 2 Weeks):**
- [What's coming up soon]

**Next Meeting:**
- **Date:** [If mentioned, or suggest timing]
- **Agenda:**
  - [Topic 1 - based on unresolved items or next logical steps]
  - [Topic 2]

---

**IMPORTANT RULES:**
1. Only include information from the notes - don't invent details
2. If information is missing (owner, date, details), mark it with ⚠️
3. Maintain professional tone
4. Use checkboxes [ ] for action items
5. Be concise but complete
6. Prioritize action items by urgency and impact
7. For vague action items, note what clarification is needed"#
    }

    /// Template for the follow-up email
    pub fn email() -> &'static str {
        r#"Create a professional follow-up email based on this meeting summary.

MEETING SUMMARY:
{summary}

Generate an email with this structure:

Subject: [Meeting topic] - Summary & Action Items - [Date]

Hi [Team/Names if known, otherwise "team"],

Thanks for the productive meeting [add "on [topic]" if clear from summary].

**KEY DECISIONS:**
- [Decision 1]
- [Decision 2]

**ACTION ITEMS:**
- [Name/Role] - [Task] - [Due date]
- [Name/Role] - [Task] - [Due date]

**NEXT STEPS:**
[2-3 sentence overview of immediate actions and timeline]

**BLOCKERS/NEEDS:**
[Only if there are blockers or items needing attention]

[If next meeting scheduled: "Our next meeting is [date] to discuss [topics]."]

Please let me know if I missed anything or if you have questions!

Best,
[Your name]

---

**RULES:**
1. Professional but warm tone
2. Concise - aim for 150-200 words
3. Action-oriented
4. Easy to skim (use bullets and sections)
5. Only include information from the summary
6. If no action items or decisions, adjust format accordingly"#
    }

    /// Template for the executive brief
    pub fn brief() -> &'static str {
        r#"Create a brief executive summary from this meeting information.

MEETING SUMMARY:
{summary}

Generate an executive brief in this format:

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
EXECUTIVE BRIEF: [Meeting Topic]
[Date] | Status: 🟢/🟡/🔴
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

**THE HEADLINE:**
[One sentence capturing the most important outcome or development]

**WHAT HAPPENED:**
[2-3 sentences providing context and key discussion points]

**KEY DECISIONS:**
- [Decision 1]
- [Decision 2]

**BUSINESS IMPACT:**
[How this affects the business/project - timeline, resources, risks, opportunities]

**WHAT'S NEEDED:**
[Any decisions, resources, or actions needed from leadership]

**NEXT MILESTONE:**
[What's the next big deliverable or checkpoint, and when]

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

**RULES:**
1. Maximum 200 words
2. Lead with impact
3. Be specific with timeline and numbers
4. Action-oriented
5. Written for C-level audience
6. Status: 🟢 = on track, 🟡 = at risk, 🔴 = blocked/critical"#
    }

    /// Render the meeting summary prompt
    pub fn format_summary(notes: &str, date: &str) -> String {
        Self::summary().replace("{notes}", notes).replace("{date}", date)
    }

    /// Render the follow-up email prompt from an existing summary
    pub fn format_email(summary: &str) -> String {
        Self::email().replace("{summary}", summary)
    }

    /// Render the executive brief prompt from an existing summary
    pub fn format_brief(summary: &str) -> String {
        Self::brief().replace("{summary}", summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_placeholders() {
        assert!(PromptTemplates::summary().contains("{notes}"));
        assert!(PromptTemplates::summary().contains("{date}"));
        assert!(PromptTemplates::email().contains("{summary}"));
        assert!(PromptTemplates::brief().contains("{summary}"));
        assert!(!PromptTemplates::system().is_empty());
    }

    #[test]
    fn test_format_summary_is_pure() {
        let notes = "Discussed Q3 roadmap. Maria owns the launch.";
        let date = "March 05, 2026";
        let first = PromptTemplates::format_summary(notes, date);
        let second = PromptTemplates::format_summary(notes, date);
        assert_eq!(first, second);
        assert!(first.contains(notes));
        assert!(first.contains(date));
        assert!(!first.contains("{notes}"));
        assert!(!first.contains("{date}"));
    }

    #[test]
    fn test_derived_prompts_take_summary_verbatim() {
        let summary = "## Decisions\n- Ship in March";
        let email = PromptTemplates::format_email(summary);
        let brief = PromptTemplates::format_brief(summary);
        assert!(email.contains(summary));
        assert!(brief.contains(summary));
        assert!(!email.contains("{summary}"));
        assert!(!brief.contains("{summary}"));
    }
}

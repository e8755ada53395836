use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};

pub fn participant_overview_prompt(participant_id: i64) -> GetPromptResult {
    GetPromptResult::new(vec![PromptMessage::new_text(
            PromptMessageRole::User,
            format!(
                "Give an overview of participant {}.\n\nInclude:\n1. Name, gender, club, age and age group\n2. Disciplines the participant is registered for\n3. Every recorded result with its date and formatted value\n4. The best result per discipline (lowest time for TIME, highest value for DISTANCE and POINTS)\n\nUse get_participant with id={} and present results exactly as shown in their display field.",
                participant_id, participant_id
            ),
        )])
    .with_description(format!("Overview of participant {}", participant_id))
}

pub fn discipline_standings_prompt(discipline_id: i64, age_group: Option<&str>) -> GetPromptResult {
    let scope = match age_group {
        Some(group) => format!(" in age group {}", group),
        None => String::new(),
    };
    GetPromptResult::new(vec![PromptMessage::new_text(
            PromptMessageRole::User,
            format!(
                "Build the standings for discipline {}{}.\n\nSteps:\n1. Use get_discipline with id={} to learn its name and result type\n2. Use filter_participants with that discipline name{} to find the entrants\n3. Take each entrant's best result in the discipline\n4. Rank them: ascending for TIME, descending for DISTANCE and POINTS\n\nShow rank, name, club, age group and the formatted result.",
                discipline_id,
                scope,
                discipline_id,
                if age_group.is_some() {
                    " and the age group"
                } else {
                    ""
                }
            ),
        )])
    .with_description(format!("Standings for discipline {}{}", discipline_id, scope))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(result: &GetPromptResult) -> String {
        serde_json::to_string(&result.messages).unwrap()
    }

    #[test]
    fn overview_mentions_participant_tool() {
        let p = participant_overview_prompt(7);
        assert!(p.description.unwrap().contains('7'));
        assert!(text(&participant_overview_prompt(7)).contains("get_participant"));
    }

    #[test]
    fn standings_scope_by_age_group() {
        let p = discipline_standings_prompt(3, Some("JUNIOR"));
        assert!(p.description.as_deref().unwrap().contains("JUNIOR"));
        let p = discipline_standings_prompt(3, None);
        assert!(!p.description.as_deref().unwrap().contains("age group"));
    }
}

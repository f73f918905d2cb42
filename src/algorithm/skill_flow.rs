//! Skill to experience-level flow for one state.

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::filter::state_filter;
use crate::models::{JobTable, TextColumn};
use crate::reference::{NEUTRAL_NODE_COLOR, experience_rank, skill_color, state_name};
use crate::utils::CountTable;

/// What a flow node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowNodeKind {
    Skill,
    ExperienceLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub label: String,
    pub kind: FlowNodeKind,
    pub color: &'static str,
}

/// Edge between a skill node and an experience-level node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowLink {
    /// Index of the skill node
    pub source: usize,
    /// Index of the experience-level node
    pub target: usize,
    /// Rows carrying both the skill and the level
    pub value: usize,
    pub color: &'static str,
}

/// Bipartite flow from the top skills of a state to experience levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillExperienceFlow {
    pub state: String,
    pub title: String,
    /// Ranked skills, most frequent first
    pub top_skills: Vec<String>,
    /// Skill nodes in rank order, then experience-level nodes
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl SkillExperienceFlow {
    /// Sum of all link values
    #[must_use]
    pub fn total(&self) -> usize {
        self.links.iter().map(|l| l.value).sum()
    }
}

/// Build the flow for the most frequent skills of a state
///
/// Skills listed in [`DashboardConfig::excluded_skills`] never rank. Rows
/// missing a skill or a level are skipped.
pub fn skill_experience_flow(
    table: &JobTable,
    state: &str,
    selected_skill: &str,
    config: &DashboardConfig,
) -> Result<SkillExperienceFlow> {
    let rows = table.filter(&state_filter(state))?;
    let skills = rows.text(TextColumn::Skill);
    let levels = rows.text(TextColumn::ExperienceLevel);

    let skill_counts: CountTable<&str> = skills
        .iter()
        .flatten()
        .filter(|skill| !config.is_excluded_skill(skill))
        .collect();
    let top_skills: Vec<&str> = skill_counts
        .top(config.top_skills)
        .into_iter()
        .map(|(skill, _)| skill)
        .collect();

    let pairs: CountTable<(usize, &str)> = skills
        .iter()
        .zip(levels.iter())
        .filter_map(|(skill, level)| {
            let rank = top_skills.iter().position(|s| Some(*s) == skill)?;
            Some((rank, level?))
        })
        .collect();

    let mut level_labels: Vec<&str> = Vec::new();
    for ((_, level), _) in pairs.iter() {
        if !level_labels.contains(level) {
            level_labels.push(*level);
        }
    }
    // Known levels in stacking order; unknown ones after, by first appearance.
    level_labels.sort_by_key(|level| experience_rank(level).unwrap_or(usize::MAX));

    let mut nodes: Vec<FlowNode> = top_skills
        .iter()
        .enumerate()
        .map(|(rank, skill)| FlowNode {
            label: (*skill).to_string(),
            kind: FlowNodeKind::Skill,
            color: skill_color(rank),
        })
        .collect();
    nodes.extend(level_labels.iter().map(|level| FlowNode {
        label: (*level).to_string(),
        kind: FlowNodeKind::ExperienceLevel,
        color: NEUTRAL_NODE_COLOR,
    }));

    let level_offset = top_skills.len();
    let mut links: Vec<FlowLink> = pairs
        .iter()
        .filter_map(|(&(rank, level), value)| {
            let target = level_offset + level_labels.iter().position(|l| *l == level)?;
            Some(FlowLink {
                source: rank,
                target,
                value,
                color: skill_color(rank),
            })
        })
        .collect();
    links.sort_by_key(|link| (link.source, link.target));

    let state_label = state_name(state).unwrap_or(state);
    Ok(SkillExperienceFlow {
        state: state.to_string(),
        title: format!("Skill Distribution in Job Postings for {selected_skill} in {state_label}"),
        top_skills: top_skills.iter().map(|s| (*s).to_string()).collect(),
        nodes,
        links,
    })
}

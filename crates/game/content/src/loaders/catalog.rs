//! Unit and skill catalog loader.
//!
//! Reads `skills.json`, `samurai.json` and `monsters.json` from a data
//! directory. Skills load first so unit records can refer to them by name.

use std::collections::HashMap;
use std::path::Path;

use battle_core::{
    Affinity, AffinityTable, BattleConfig, Element, HitSpec, Skill, SkillType, Stats, TargetMode,
    Unit,
};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct SkillRecord {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    cost: u32,
    power: u32,
    target: String,
    #[serde(default)]
    hits: String,
    #[serde(default)]
    effect: String,
}

#[derive(Debug, Deserialize)]
struct UnitRecord {
    name: String,
    stats: Stats,
    /// Element name to affinity code; missing elements are neutral.
    #[serde(default)]
    affinity: HashMap<String, String>,
    #[serde(default)]
    skills: Vec<String>,
}

impl SkillRecord {
    fn into_skill(self) -> LoadResult<Skill> {
        let target: TargetMode = self.target.parse().map_err(|_| {
            anyhow::anyhow!("Unknown target '{}' for skill '{}'", self.target, self.name)
        })?;

        Ok(Skill::new(self.name, SkillType::from_name(&self.kind), self.cost, self.power)
            .with_target(target)
            .with_hits(HitSpec::parse_lenient(&self.hits))
            .with_effect(self.effect))
    }
}

impl UnitRecord {
    fn affinities(&self) -> AffinityTable {
        Element::TABLE_ORDER
            .iter()
            .fold(AffinityTable::neutral(), |table, element| {
                match self.affinity.get(element.as_ref()) {
                    Some(code) => table.with(*element, Affinity::from_code(code)),
                    None => table,
                }
            })
    }
}

/// Loader for the unit and skill catalog.
pub struct CatalogLoader;

impl CatalogLoader {
    pub const SKILLS_FILE: &'static str = "skills.json";
    pub const LEADERS_FILE: &'static str = "samurai.json";
    pub const SUMMONABLES_FILE: &'static str = "monsters.json";

    /// Load the catalog from the three JSON files inside `dir`.
    pub fn load(dir: &Path) -> LoadResult<Catalog> {
        let skills = read_file(&dir.join(Self::SKILLS_FILE))?;
        let leaders = read_file(&dir.join(Self::LEADERS_FILE))?;
        let summonables = read_file(&dir.join(Self::SUMMONABLES_FILE))?;

        Self::from_json(&skills, &leaders, &summonables)
    }

    /// Build a catalog from already-read JSON documents.
    ///
    /// Summonable records naming a skill the catalog lacks simply do not learn
    /// it. A record listing more than [`BattleConfig::MAX_UNIT_SKILLS`] known
    /// skills is an error.
    pub fn from_json(skills: &str, leaders: &str, summonables: &str) -> LoadResult<Catalog> {
        let skill_records: Vec<SkillRecord> = serde_json::from_str(skills)
            .map_err(|e| anyhow::anyhow!("Failed to parse skills JSON: {}", e))?;
        let leader_records: Vec<UnitRecord> = serde_json::from_str(leaders)
            .map_err(|e| anyhow::anyhow!("Failed to parse leaders JSON: {}", e))?;
        let summonable_records: Vec<UnitRecord> = serde_json::from_str(summonables)
            .map_err(|e| anyhow::anyhow!("Failed to parse summonables JSON: {}", e))?;

        let mut catalog = Catalog::new();
        for record in skill_records {
            catalog.insert_skill(record.into_skill()?);
        }

        for record in leader_records {
            let affinities = record.affinities();
            catalog.insert_unit(Unit::leader(record.name, record.stats, affinities));
        }

        for record in summonable_records {
            let mut unit = Unit::summonable(record.name.clone(), record.stats, record.affinities());
            for skill in record.skills.iter().filter_map(|name| catalog.skill(name)) {
                if !unit.learn(skill.clone()) {
                    return Err(anyhow::anyhow!(
                        "Unit '{}' knows more than {} skills",
                        record.name,
                        BattleConfig::MAX_UNIT_SKILLS
                    ));
                }
            }
            catalog.insert_unit(unit);
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKILLS: &str = r#"[
        {"name": "Agi", "type": "Fire", "cost": 3, "power": 80, "target": "Single", "hits": "1", "effect": "Deals light Fire damage to one foe."},
        {"name": "Dia", "type": "Heal", "cost": 3, "power": 25, "target": "Ally", "hits": "", "effect": "Heals HP of one ally."},
        {"name": "Multi Bite", "type": "Phys", "cost": 8, "power": 40, "target": "Multi", "hits": "2-4", "effect": ""}
    ]"#;

    const LEADERS: &str = r#"[
        {"name": "Flynn",
         "stats": {"HP": 400, "MP": 100, "Str": 30, "Skl": 30, "Mag": 30, "Spd": 30, "Lck": 30},
         "affinity": {"Phys": "-", "Gun": "-", "Fire": "Rs", "Ice": "-", "Elec": "-", "Force": "-", "Light": "Nu", "Dark": "Wk"}}
    ]"#;

    const SUMMONABLES: &str = r#"[
        {"name": "Pixie",
         "stats": {"HP": 90, "MP": 60, "Str": 8, "Skl": 10, "Mag": 14, "Spd": 20, "Lck": 12},
         "affinity": {"Phys": "-", "Gun": "-", "Fire": "-", "Ice": "-", "Elec": "Dr", "Force": "-", "Light": "-", "Dark": "Wk"},
         "skills": ["Dia", "Zio"]}
    ]"#;

    #[test]
    fn builds_catalog_from_documents() {
        let catalog = CatalogLoader::from_json(SKILLS, LEADERS, SUMMONABLES).unwrap();

        assert_eq!(catalog.skill_count(), 3);
        assert_eq!(catalog.unit_count(), 2);

        let flynn = catalog.leader("Flynn").unwrap();
        assert_eq!(flynn.hp(), 400);
        assert_eq!(flynn.affinities().get(Element::Fire), Affinity::Resist);
        assert_eq!(flynn.affinities().get(Element::Dark), Affinity::Weak);

        let multi = catalog.skill("Multi Bite").unwrap();
        assert_eq!(multi.target, TargetMode::Multi);
        assert_eq!(multi.hits, HitSpec::Range { min: 2, max: 4 });
        assert_eq!(catalog.skill("Dia").unwrap().hits, HitSpec::SINGLE);
    }

    #[test]
    fn summonables_skip_unknown_skills() {
        let catalog = CatalogLoader::from_json(SKILLS, LEADERS, SUMMONABLES).unwrap();

        let pixie = catalog.summonable("Pixie").unwrap();
        let names: Vec<_> = pixie.skills().iter().map(|skill| skill.name.as_str()).collect();
        assert_eq!(names, vec!["Dia"]);
        assert_eq!(pixie.affinities().get(Element::Elec), Affinity::Drain);
        assert!(catalog.leader("Pixie").is_none());
    }

    #[test]
    fn skill_lists_past_capacity_are_rejected() {
        let names: Vec<String> = (0..=BattleConfig::MAX_UNIT_SKILLS)
            .map(|index| format!("Skill {index}"))
            .collect();
        let skills: Vec<String> = names
            .iter()
            .map(|name| {
                format!(r#"{{"name": "{name}", "type": "Phys", "cost": 1, "power": 10, "target": "Single"}}"#)
            })
            .collect();
        let summonables = format!(
            r#"[{{"name": "Legion", "stats": {{"HP": 10, "MP": 10, "Str": 1, "Skl": 1, "Mag": 1, "Spd": 1, "Lck": 1}}, "skills": {names:?}}}]"#
        );

        let error = CatalogLoader::from_json(&format!("[{}]", skills.join(",")), "[]", &summonables)
            .unwrap_err();
        assert!(error.to_string().contains("Legion"));

        // Exactly at capacity still loads.
        let fits = summonables.replace(r#", "Skill 16""#, "");
        let catalog = CatalogLoader::from_json(&format!("[{}]", skills.join(",")), "[]", &fits).unwrap();
        assert_eq!(catalog.summonable("Legion").unwrap().skills().len(), BattleConfig::MAX_UNIT_SKILLS);
    }

    #[test]
    fn unknown_target_is_rejected() {
        let skills = r#"[{"name": "Odd", "type": "Fire", "cost": 1, "power": 1, "target": "Everyone"}]"#;
        let error = CatalogLoader::from_json(skills, "[]", "[]").unwrap_err();
        assert!(error.to_string().contains("Everyone"));
    }
}

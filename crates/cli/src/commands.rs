//! Subcommand bodies: read JSON input, run the core, write JSON output plus a
//! provenance sidecar.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;

use warmap::api::{
    polylabel_with_cfg, ArmyCalculator, ArmyCfg, Graph, LabelCfg, NeighborCalculator,
    UndirectedGraph,
};

use crate::model::{
    ArmiesReport, ArmyRecord, LabelRecord, MapFile, PolygonsFile, ValidityRecord,
};
use crate::provenance::{write_sidecar, Payload};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T, payload: Payload) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    let sidecar = write_sidecar(path, payload)?;
    tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}

pub fn label(input: &Path, out: &Path, cfg: LabelCfg) -> Result<Vec<LabelRecord>> {
    let file: PolygonsFile = read_json(input)?;
    let mut records = Vec::with_capacity(file.polygons.len());
    for named in &file.polygons {
        let polygon = named
            .polygon
            .to_polygon()
            .with_context(|| format!("polygon {}", named.name))?;
        let label = polylabel_with_cfg(&polygon, cfg)?;
        records.push(LabelRecord {
            name: named.name.clone(),
            x: label.point.x,
            y: label.point.y,
            distance: label.distance,
        });
    }
    tracing::info!(polygons = records.len(), precision = cfg.precision, "labels placed");
    let payload = Payload::new(
        "label",
        json!({"input": input.display().to_string(), "precision": cfg.precision}),
    );
    write_json(out, &records, payload)?;
    Ok(records)
}

pub fn validate(input: &Path, out: &Path) -> Result<Vec<ValidityRecord>> {
    let file: PolygonsFile = read_json(input)?;
    let mut records = Vec::with_capacity(file.polygons.len());
    for named in &file.polygons {
        let polygon = named
            .polygon
            .to_polygon()
            .with_context(|| format!("polygon {}", named.name))?;
        let record = ValidityRecord {
            name: named.name.clone(),
            simple: polygon.outer.is_simple(),
            valid: polygon.is_valid(),
        };
        if !record.valid {
            tracing::warn!(name = %record.name, "boundary self-intersects");
        }
        records.push(record);
    }
    let invalid = records.iter().filter(|r| !r.valid).count();
    tracing::info!(polygons = records.len(), invalid, "validated");
    let payload = Payload::new("validate", json!({"input": input.display().to_string()}));
    write_json(out, &records, payload)?;
    Ok(records)
}

pub fn armies(input: &Path, out: &Path, cfg: ArmyCfg) -> Result<ArmiesReport> {
    let file: MapFile = read_json(input)?;

    let mut graph = UndirectedGraph::from_edges(file.edges.iter().copied());
    let mut territories = Vec::new();
    for dto in &file.territories {
        graph.insert_vertex(dto.id);
        if let Some(t) = dto
            .to_territory()
            .with_context(|| format!("territory {}", dto.id))?
        {
            territories.push(t);
        }
    }
    NeighborCalculator::new().create_neighbors(&territories, &mut graph);

    let territory_count = file.territories.len().max(graph.vertex_count());
    let mut bonuses = file.bonuses();
    let mut super_bonuses = file.super_bonuses();
    ArmyCalculator::new(territory_count, &graph, cfg)?
        .calculate_armies(&mut bonuses, &mut super_bonuses)?;

    let record = |name: &str, armies: u32| ArmyRecord {
        name: name.to_string(),
        armies,
    };
    let report = ArmiesReport {
        territories: territory_count,
        edges: graph.edge_count(),
        bonuses: bonuses.iter().map(|b| record(&b.name, b.armies)).collect(),
        super_bonuses: super_bonuses
            .iter()
            .map(|b| record(&b.name, b.armies))
            .collect(),
    };
    tracing::info!(
        territories = report.territories,
        edges = report.edges,
        bonuses = report.bonuses.len(),
        "armies assigned"
    );
    let payload = Payload::new(
        "armies",
        json!({
            "input": input.display().to_string(),
            "min_armies": cfg.min_armies,
            "max_armies": cfg.max_armies,
        }),
    );
    write_json(out, &report, payload)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, value: Value) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_vec(&value).unwrap()).unwrap();
        path
    }

    #[test]
    fn label_writes_records_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = write(
            dir.path(),
            "polygons.json",
            json!({"polygons": [
                {"name": "square", "outer": [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]}
            ]}),
        );
        let out = dir.path().join("out").join("labels.json");
        let records = label(&input, &out, LabelCfg::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!((records[0].x, records[0].y, records[0].distance), (5.0, 5.0, 5.0));

        let written: Vec<LabelRecord> = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(written, records);
        assert!(dir.path().join("out").join("labels.provenance.json").exists());
    }

    #[test]
    fn label_rejects_short_rings() {
        let dir = tempdir().unwrap();
        let input = write(
            dir.path(),
            "polygons.json",
            json!({"polygons": [{"name": "sliver", "outer": [[0, 0], [1, 1]]}]}),
        );
        let err = label(&input, &dir.path().join("labels.json"), LabelCfg::default()).unwrap_err();
        assert!(format!("{err:#}").contains("sliver"));
    }

    #[test]
    fn validate_flags_bowtie() {
        let dir = tempdir().unwrap();
        let input = write(
            dir.path(),
            "rings.json",
            json!({"polygons": [
                {"name": "quad", "outer": [[0, 0], [4, 0], [4, 4], [0, 4]]},
                {"name": "bowtie", "outer": [[0, 0], [4, 4], [4, 0], [0, 4]]}
            ]}),
        );
        let records = validate(&input, &dir.path().join("validity.json")).unwrap();
        assert!(records[0].simple && records[0].valid);
        assert!(!records[1].simple && !records[1].valid);
    }

    #[test]
    fn armies_from_explicit_edges() {
        let dir = tempdir().unwrap();
        let input = write(
            dir.path(),
            "map.json",
            json!({
                "edges": [[0, 1], [1, 2], [2, 3], [3, 4], [4, 0], [0, 2]],
                "bonuses": [{"name": "A", "children": [0, 1]}],
                "super_bonuses": [{"name": "all", "children": [0]}]
            }),
        );
        let report = armies(&input, &dir.path().join("armies.json"), ArmyCfg::default()).unwrap();
        assert_eq!((report.territories, report.edges), (5, 6));
        assert_eq!(report.bonuses, vec![ArmyRecord { name: "A".into(), armies: 5 }]);
        assert_eq!(report.super_bonuses[0].armies, 5);
    }

    #[test]
    fn armies_from_shared_boundaries() {
        let dir = tempdir().unwrap();
        let input = write(
            dir.path(),
            "map.json",
            json!({
                "territories": [
                    {"id": 0, "name": "west", "polygon": {"outer": [[0, 0], [10, 0], [10, 10], [0, 10]]}},
                    {"id": 1, "name": "east", "polygon": {"outer": [[10, 0], [20, 0], [20, 10], [10, 10]]}},
                    {"id": 2, "name": "far"}
                ],
                "bonuses": [{"name": "west", "children": [0]}, {"name": "far", "children": [2]}]
            }),
        );
        let report = armies(&input, &dir.path().join("armies.json"), ArmyCfg::default()).unwrap();
        assert_eq!((report.territories, report.edges), (3, 1));
        // west: 0.5·(1/3) + 0.5·0.5 ≈ 0.417; far: 0.5·(1/3) ≈ 0.167.
        assert_eq!(report.bonuses[0].armies, 4);
        assert_eq!(report.bonuses[1].armies, 2);
    }

    #[test]
    fn armies_rejects_inverted_bounds() {
        let dir = tempdir().unwrap();
        let input = write(dir.path(), "map.json", json!({"bonuses": []}));
        let cfg = ArmyCfg {
            min_armies: 9,
            max_armies: 2,
            ..ArmyCfg::default()
        };
        assert!(armies(&input, &dir.path().join("armies.json"), cfg).is_err());
    }
}

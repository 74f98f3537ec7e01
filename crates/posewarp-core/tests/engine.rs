use std::collections::HashMap;

use posewarp_core::{Engine, JointTransform, RestPoseSource, RuleCode};

struct MapSource {
    poses: HashMap<String, JointTransform>,
    calls: usize,
}

impl MapSource {
    fn new(entries: &[(&str, JointTransform)]) -> Self {
        Self {
            poses: entries
                .iter()
                .map(|(name, pose)| (name.to_string(), *pose))
                .collect(),
            calls: 0,
        }
    }
}

impl RestPoseSource for MapSource {
    fn rest_pose(&mut self, joint: &str) -> Option<JointTransform> {
        self.calls += 1;
        self.poses.get(joint).copied()
    }
}

fn rest_at(x: f32) -> JointTransform {
    JointTransform {
        translation: [x, 0.0, 0.0],
        ..JointTransform::IDENTITY
    }
}

fn code(s: &str) -> RuleCode {
    RuleCode::parse(s).unwrap()
}

/// it should emit one change per resolvable joint every update, in joint order
#[test]
fn update_emits_change_per_joint() {
    let mut engine = Engine::new(["hip", "spine", "head"]);
    let mut source = MapSource::new(&[
        ("hip", rest_at(0.0)),
        ("spine", rest_at(1.0)),
        ("head", rest_at(2.0)),
    ]);
    engine.rules_mut().assign("head", code("Tsx")).unwrap();

    let outputs = engine.update(0.0, &mut source);
    assert_eq!(outputs.changes.len(), 3);
    assert_eq!(outputs.changes[0].joint, "hip");
    assert_eq!(outputs.changes[1].joint, "spine");
    assert_eq!(outputs.changes[2].joint, "head");

    // unperturbed joints pass their rest pose through
    assert_eq!(outputs.changes[0].transform, rest_at(0.0));
    // t=0 sinusoidal: u=0.5, offset u*0.5=0.25 on x
    let head_x = outputs.changes[2].transform.translation[0];
    assert!((head_x - 2.25).abs() <= 1e-6, "head_x={head_x}");
}

/// it should skip joints the source cannot resolve and retry them next frame
#[test]
fn unresolved_joints_are_retried() {
    let mut engine = Engine::new(["hip", "head"]);
    let mut source = MapSource::new(&[("hip", rest_at(0.0))]);

    let outputs = engine.update(0.0, &mut source);
    assert_eq!(outputs.changes.len(), 1);
    assert_eq!(outputs.changes[0].joint, "hip");

    // skeleton finished loading
    source
        .poses
        .insert("head".to_string(), rest_at(5.0));
    let outputs = engine.update(0.016, &mut source);
    assert_eq!(outputs.changes.len(), 2);
    assert_eq!(outputs.changes[1].joint, "head");
}

/// it should fetch each rest pose once and reuse the memoized value
#[test]
fn rest_poses_are_memoized_first_write_wins() {
    let mut engine = Engine::new(["hip", "head"]);
    let mut source = MapSource::new(&[("hip", rest_at(0.0)), ("head", rest_at(2.0))]);

    engine.update(0.0, &mut source);
    assert_eq!(source.calls, 2);

    // mutating the source after the first fetch must not leak through
    source.poses.insert("head".to_string(), rest_at(99.0));
    let outputs = engine.update(1.0, &mut source);
    assert_eq!(source.calls, 2);
    assert_eq!(outputs.changes[1].transform.translation[0], 2.0);
}

/// it should clear outputs at the top of each update, not accumulate
#[test]
fn outputs_reset_each_tick() {
    let mut engine = Engine::new(["hip"]);
    let mut source = MapSource::new(&[("hip", rest_at(0.0))]);
    engine.update(0.0, &mut source);
    let outputs = engine.update(0.016, &mut source);
    assert_eq!(outputs.changes.len(), 1);
}

/// it should serialize outputs with joint keys and full transform triples
#[test]
fn outputs_json_shape() {
    let mut engine = Engine::new(["hip"]);
    let mut source = MapSource::new(&[("hip", rest_at(0.0))]);
    let outputs = engine.update(0.0, &mut source);

    let v = serde_json::to_value(outputs).unwrap();
    let change = &v["changes"][0];
    assert_eq!(change["joint"], "hip");
    assert_eq!(change["transform"]["rotation"].as_array().unwrap().len(), 4);
    assert_eq!(change["transform"]["scale"].as_array().unwrap().len(), 3);
    assert_eq!(
        change["transform"]["translation"].as_array().unwrap().len(),
        3
    );
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use posewarp_core::{Engine, JointTransform, NamedRule, RestPoseSource};

struct FixedSource;

impl RestPoseSource for FixedSource {
    fn rest_pose(&mut self, _joint: &str) -> Option<JointTransform> {
        Some(JointTransform::IDENTITY)
    }
}

fn bench_update(c: &mut Criterion) {
    let joints: Vec<String> = (0..64).map(|i| format!("joint{i}")).collect();
    let mut engine = Engine::new(joints.iter().cloned());
    // spread the non-none catalog over the rig
    for (i, name) in joints.iter().enumerate() {
        let rule = NamedRule::ALL[1 + i % (NamedRule::ALL.len() - 1)];
        engine.rules_mut().assign(name, rule.code()).unwrap();
    }
    let mut source = FixedSource;
    let mut time = 0.0f32;

    c.bench_function("update_64_joints", |b| {
        b.iter(|| {
            time += 0.016;
            black_box(engine.update(time, &mut source));
        })
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use math_minfinder::{DescentConfig, FunctionRegistry, RunParametersBuilder, find_minima, local_descent};
use ndarray::array;

fn bench_local_descent(c: &mut Criterion) {
    let registry = FunctionRegistry::standard();
    let config = DescentConfig::default();

    for name in ["camel", "rastrigin", "shubert"] {
        let objective = registry.get(name).expect("registered").objective();
        let start = array![1.3, -0.7];
        c.bench_function(&format!("local_descent_{name}"), |b| {
            b.iter(|| local_descent(objective, black_box(&start), &config))
        });
    }
}

fn bench_multistart(c: &mut Criterion) {
    let registry = FunctionRegistry::standard();
    let objective = registry.get("griewank").expect("registered").objective();
    let params = RunParametersBuilder::new()
        .seed(42)
        .build()
        .expect("valid parameters");

    c.bench_function("multistart_griewank_default", |b| {
        b.iter(|| find_minima(objective, black_box(params.clone())))
    });
}

criterion_group!(benches, bench_local_descent, bench_multistart);
criterion_main!(benches);

// src/layout/force.rs

//! Force-directed placement.
//!
//! Each iteration:
//! 1. damp every node's velocity,
//! 2. push apart every pair closer than `min_distance` (inverse square),
//! 3. pull every dependency edge toward `ideal_edge_length` (linear spring),
//! 4. move each node by its velocity,
//! 5. clamp each node into `[margin, dimension - margin]`.
//!
//! This is a best-effort heuristic: it runs a fixed number of iterations and
//! has no convergence test, so overlaps can survive. Bound the work by
//! choosing `iterations`; there is nothing to cancel mid-run.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dag::graph::TaskGraph;
use crate::layout::rng::RandomSource;
use crate::layout::{Canvas, Position, Positions};
use crate::task::Task;

/// Physics constants for the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceParams {
    pub iterations: usize,
    /// Velocity multiplier applied at the start of every iteration.
    pub damping: f64,
    /// Numerator of the inverse-square repulsion.
    pub repulsion_strength: f64,
    /// Pairs at or beyond this distance do not repel.
    pub min_distance: f64,
    /// Spring coefficient along dependency edges.
    pub attraction_strength: f64,
    /// Rest length of an edge spring.
    pub ideal_edge_length: f64,
    /// Distance kept from every canvas edge.
    pub margin: f64,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            iterations: 150,
            damping: 0.8,
            repulsion_strength: 8000.0,
            min_distance: 250.0,
            attraction_strength: 0.1,
            ideal_edge_length: 200.0,
            margin: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Body {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

impl Body {
    /// Keep the body inside `[margin, dimension - margin]` on both axes.
    ///
    /// max/min rather than clamp: no panic if the margins overlap.
    fn clamp_into(&mut self, canvas: &Canvas, margin: f64) {
        self.x = self.x.max(margin).min(canvas.width - margin);
        self.y = self.y.max(margin).min(canvas.height - margin);
    }
}

/// Run the simulation and return the final positions.
///
/// `seeds` are starting points in the same convention as the output (`x`
/// already shifted by half the node footprint), so a previous layout can be
/// fed straight back in. Tasks without a seed start at a uniformly random
/// point on the canvas drawn from `rng` (x first, then y, in snapshot order).
/// Starting points are pulled inside the margins before the first iteration,
/// so even a zero-iteration run returns bounded positions.
pub fn simulate<R: RandomSource + ?Sized>(
    tasks: &[Task],
    canvas: &Canvas,
    params: &ForceParams,
    seeds: &Positions,
    rng: &mut R,
) -> Positions {
    let graph = TaskGraph::from_tasks(tasks);
    let half_node = canvas.node_width / 2.0;

    let mut bodies: Vec<Body> = tasks
        .iter()
        .map(|task| {
            let (x, y) = match seeds.get(&task.id) {
                Some(seed) => (seed.x + half_node, seed.y),
                None => (rng.next_unit() * canvas.width, rng.next_unit() * canvas.height),
            };
            let mut body = Body { x, y, vx: 0.0, vy: 0.0 };
            body.clamp_into(canvas, params.margin);
            body
        })
        .collect();

    for _ in 0..params.iterations {
        step(&graph, &mut bodies, canvas, params);
    }

    debug!(
        tasks = tasks.len(),
        seeded = tasks.iter().filter(|t| seeds.contains_key(&t.id)).count(),
        iterations = params.iterations,
        "force simulation done"
    );

    tasks
        .iter()
        .zip(&bodies)
        .map(|(task, body)| {
            (
                task.id.clone(),
                Position {
                    x: body.x - half_node,
                    y: body.y,
                },
            )
        })
        .collect()
}

fn step(graph: &TaskGraph<'_>, bodies: &mut [Body], canvas: &Canvas, params: &ForceParams) {
    for body in bodies.iter_mut() {
        body.vx *= params.damping;
        body.vy *= params.damping;
    }

    apply_repulsion(bodies, params);
    apply_springs(graph, bodies, params);

    for body in bodies.iter_mut() {
        // Near-coincident nodes can blow a velocity up to inf/NaN; drop it.
        if !body.vx.is_finite() {
            body.vx = 0.0;
        }
        if !body.vy.is_finite() {
            body.vy = 0.0;
        }

        body.x += body.vx;
        body.y += body.vy;
        body.clamp_into(canvas, params.margin);
    }
}

fn apply_repulsion(bodies: &mut [Body], params: &ForceParams) {
    for a in 0..bodies.len() {
        for b in (a + 1)..bodies.len() {
            let dx = bodies[b].x - bodies[a].x;
            let dy = bodies[b].y - bodies[a].y;
            let distance = separation(dx, dy);

            if distance < params.min_distance {
                let force = params.repulsion_strength / (distance * distance);
                let fx = dx / distance * force;
                let fy = dy / distance * force;

                bodies[a].vx -= fx;
                bodies[a].vy -= fy;
                bodies[b].vx += fx;
                bodies[b].vy += fy;
            }
        }
    }
}

fn apply_springs(graph: &TaskGraph<'_>, bodies: &mut [Body], params: &ForceParams) {
    for task in 0..graph.len() {
        for &dep in graph.dependencies(task) {
            let dx = bodies[dep].x - bodies[task].x;
            let dy = bodies[dep].y - bodies[task].y;
            let distance = separation(dx, dy);

            // Negative when closer than the rest length: the spring pushes.
            let force = params.attraction_strength * (distance - params.ideal_edge_length);
            let fx = dx / distance * force;
            let fy = dy / distance * force;

            bodies[task].vx += fx;
            bodies[task].vy += fy;
            bodies[dep].vx -= fx;
            bodies[dep].vy -= fy;
        }
    }
}

/// Euclidean distance, with exact coincidence treated as 1.
fn separation(dx: f64, dy: f64) -> f64 {
    let distance = (dx * dx + dy * dy).sqrt();
    if distance == 0.0 { 1.0 } else { distance }
}

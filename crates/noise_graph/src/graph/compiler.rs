//! Compiler for module graph specifications.
//!
//! This module turns a [`ModuleGraphSpec`] into a [`ModuleGraph`]. It validates that
//! every input names a node, that each node lists exactly as many inputs as its module
//! reads, and that external nodes resolve in the [`ModuleRegistry`]. It then computes a
//! topological order and instantiates modules along it, so each node is built once and
//! shared by all of its parents.
//!
//! Typical usage:
//! - [`GraphCompiler`] with [`GraphCompiler::compile`]
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::spec::ModuleGraphSpec;
use crate::graph::{ModuleGraph, ModuleId, ModuleRegistry, ModuleSpec};
use crate::module::{Constant, ModuleExt, ModuleRef};
use crate::operator::{
    Abs, Add, Blend, Clamp, Exponent, Invert, Max, Min, Multiply, Power, ScaleBias, Subtract,
};

/// Compiler for module graph specifications.
pub struct GraphCompiler;

impl GraphCompiler {
    /// Validates `spec` and instantiates every node, resolving external nodes in `registry`.
    pub fn compile(spec: &ModuleGraphSpec, registry: &ModuleRegistry) -> Result<ModuleGraph> {
        // Sorted so the first reported problem does not depend on hash order.
        let mut ids: Vec<&ModuleId> = spec.nodes.keys().collect();
        ids.sort_unstable();

        for id in ids {
            let node_spec = &spec.nodes[id];
            for input in node_spec.inputs() {
                if !spec.nodes.contains_key(input) {
                    return Err(Error::Compile(format!(
                        "Node '{}' references unknown input '{}'",
                        id, input
                    )));
                }
            }

            validate_node_inputs(id, node_spec)?;

            if let ModuleSpec::External { params } = node_spec {
                if !registry.contains(&params.module_id) {
                    return Err(Error::MissingModule {
                        id: params.module_id.clone(),
                    });
                }
            }
        }

        let topo = topo_sort(&spec.nodes)?;

        let mut modules: HashMap<ModuleId, ModuleRef> = HashMap::with_capacity(topo.len());
        for id in &topo {
            let node_spec = &spec.nodes[id];
            let inputs = node_spec
                .inputs()
                .iter()
                .map(|input| {
                    modules.get(input).cloned().ok_or_else(|| {
                        Error::Compile(format!(
                            "Node '{}' was built before its input '{}'",
                            id, input
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            let module = instantiate(id, node_spec, inputs, registry)?;
            trace!(id = %id, kind = node_spec.kind_name(), "instantiated module");
            modules.insert(id.clone(), module);
        }

        debug!(
            nodes = modules.len(),
            registered = registry.len(),
            "compiled module graph"
        );
        Ok(ModuleGraph::new(modules, topo))
    }

    /// Compiles `spec` and returns the module built for `root`.
    pub fn compile_root(
        spec: &ModuleGraphSpec,
        registry: &ModuleRegistry,
        root: &str,
    ) -> Result<ModuleRef> {
        Self::compile(spec, registry)?.module(root)
    }
}

fn validate_node_inputs(id: &str, node_spec: &ModuleSpec) -> Result<()> {
    let found = node_spec.inputs().len();
    let required = node_spec.required_inputs();
    if found != required {
        return Err(Error::Compile(format!(
            "Node '{}' ({}) requires exactly {} input(s) but found {}",
            id,
            node_spec.kind_name(),
            required,
            found
        )));
    }
    Ok(())
}

fn sources<const N: usize>(id: &str, inputs: Vec<ModuleRef>) -> Result<[ModuleRef; N]> {
    inputs.try_into().map_err(|inputs: Vec<ModuleRef>| {
        Error::Compile(format!(
            "Node '{}' requires exactly {} input(s) but found {}",
            id,
            N,
            inputs.len()
        ))
    })
}

fn instantiate(
    id: &str,
    node_spec: &ModuleSpec,
    inputs: Vec<ModuleRef>,
    registry: &ModuleRegistry,
) -> Result<ModuleRef> {
    let module = match node_spec {
        ModuleSpec::Constant { params } => Constant::new(params.value).into_ref(),
        ModuleSpec::External { params } => {
            registry
                .get(&params.module_id)
                .ok_or_else(|| Error::MissingModule {
                    id: params.module_id.clone(),
                })?
        }
        ModuleSpec::Abs { .. } => {
            let [source] = sources(id, inputs)?;
            Abs::with_source(source).into_ref()
        }
        ModuleSpec::Clamp { params, .. } => {
            let [source] = sources(id, inputs)?;
            Clamp::with_source(params.min, params.max, source).into_ref()
        }
        ModuleSpec::Invert { .. } => {
            let [source] = sources(id, inputs)?;
            Invert::with_source(source).into_ref()
        }
        ModuleSpec::ScaleBias { params, .. } => {
            let [source] = sources(id, inputs)?;
            ScaleBias::with_source(params.scale, params.bias, source).into_ref()
        }
        ModuleSpec::Exponent { params, .. } => {
            let [source] = sources(id, inputs)?;
            Exponent::with_source(params.exponent, source).into_ref()
        }
        ModuleSpec::Add { .. } => {
            let [lhs, rhs] = sources(id, inputs)?;
            Add::with_sources(lhs, rhs).into_ref()
        }
        ModuleSpec::Subtract { .. } => {
            let [lhs, rhs] = sources(id, inputs)?;
            Subtract::with_sources(lhs, rhs).into_ref()
        }
        ModuleSpec::Multiply { .. } => {
            let [lhs, rhs] = sources(id, inputs)?;
            Multiply::with_sources(lhs, rhs).into_ref()
        }
        ModuleSpec::Min { .. } => {
            let [lhs, rhs] = sources(id, inputs)?;
            Min::with_sources(lhs, rhs).into_ref()
        }
        ModuleSpec::Max { .. } => {
            let [lhs, rhs] = sources(id, inputs)?;
            Max::with_sources(lhs, rhs).into_ref()
        }
        ModuleSpec::Power { .. } => {
            let [base, exponent] = sources(id, inputs)?;
            Power::with_sources(base, exponent).into_ref()
        }
        ModuleSpec::Blend { .. } => {
            let [a, b, control] = sources(id, inputs)?;
            Blend::with_sources(a, b, control).into_ref()
        }
    };
    Ok(module)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Finished,
}

/// Orders nodes so each follows its inputs, walking ids in sorted order.
///
/// A cycle is reported with its full path, e.g. `a -> b -> a`.
fn topo_sort(nodes: &HashMap<ModuleId, ModuleSpec>) -> Result<Vec<ModuleId>> {
    let mut ids: Vec<&ModuleId> = nodes.keys().collect();
    ids.sort_unstable();

    let mut state: HashMap<&str, Visit> = HashMap::with_capacity(nodes.len());
    let mut path: Vec<&str> = Vec::new();
    let mut order: Vec<ModuleId> = Vec::with_capacity(nodes.len());

    for id in ids {
        visit(id, nodes, &mut state, &mut path, &mut order)?;
    }
    Ok(order)
}

fn visit<'a>(
    id: &'a str,
    nodes: &'a HashMap<ModuleId, ModuleSpec>,
    state: &mut HashMap<&'a str, Visit>,
    path: &mut Vec<&'a str>,
    order: &mut Vec<ModuleId>,
) -> Result<()> {
    match state.get(id) {
        Some(Visit::Finished) => return Ok(()),
        Some(Visit::InProgress) => {
            let start = path.iter().position(|p| *p == id).unwrap_or(0);
            let mut cycle = path[start..].to_vec();
            cycle.push(id);
            return Err(Error::Compile(format!(
                "Cycle detected: {}",
                cycle.join(" -> ")
            )));
        }
        None => {}
    }

    let Some(node_spec) = nodes.get(id) else {
        return Err(Error::Compile(format!("Unknown node '{}'", id)));
    };

    state.insert(id, Visit::InProgress);
    path.push(id);
    for input in node_spec.inputs() {
        visit(input, nodes, state, path, order)?;
    }
    path.pop();
    state.insert(id, Visit::Finished);
    order.push(id.to_string());
    Ok(())
}

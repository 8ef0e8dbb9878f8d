//! Node specifications for module graphs.
//!
//! Each [`ModuleSpec`] names one module type, its configuration, and the ids of the
//! nodes feeding its source slots, in slot order.
use crate::graph::ModuleId;

/// Parameters for a constant value node.
#[derive(Clone, Debug)]
pub struct ConstantParams {
    /// The constant value.
    pub value: f32,
}

/// Parameters for a node resolved from a [`ModuleRegistry`](crate::graph::ModuleRegistry).
#[derive(Clone, Debug)]
pub struct ExternalParams {
    /// Registry id of the module.
    pub module_id: String,
}

/// Parameters for a clamp node.
#[derive(Clone, Debug)]
pub struct ClampParams {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

/// Parameters for a scale-bias node.
#[derive(Clone, Debug)]
pub struct ScaleBiasParams {
    /// Multiplier applied first.
    pub scale: f32,
    /// Offset added after scaling.
    pub bias: f32,
}

/// Parameters for an exponent node.
#[derive(Clone, Debug)]
pub struct ExponentParams {
    /// Exponent value.
    pub exponent: f32,
}

/// Specification of a node in a module graph.
#[derive(Clone, Debug)]
pub enum ModuleSpec {
    Constant {
        /// Constant node parameters.
        params: ConstantParams,
    },
    External {
        /// Registry lookup parameters.
        params: ExternalParams,
    },
    Abs {
        /// Source id.
        inputs: Vec<ModuleId>,
    },
    Clamp {
        /// Source id.
        inputs: Vec<ModuleId>,
        /// Clamp bounds.
        params: ClampParams,
    },
    Invert {
        /// Source id.
        inputs: Vec<ModuleId>,
    },
    ScaleBias {
        /// Source id.
        inputs: Vec<ModuleId>,
        /// Remap parameters.
        params: ScaleBiasParams,
    },
    Exponent {
        /// Source id.
        inputs: Vec<ModuleId>,
        /// Exponent parameters.
        params: ExponentParams,
    },
    Add {
        /// Left and right source ids.
        inputs: Vec<ModuleId>,
    },
    Subtract {
        /// Left and right source ids.
        inputs: Vec<ModuleId>,
    },
    Multiply {
        /// Left and right source ids.
        inputs: Vec<ModuleId>,
    },
    Min {
        /// Left and right source ids.
        inputs: Vec<ModuleId>,
    },
    Max {
        /// Left and right source ids.
        inputs: Vec<ModuleId>,
    },
    Power {
        /// Base and exponent source ids.
        inputs: Vec<ModuleId>,
    },
    Blend {
        /// First endpoint, second endpoint, and control source ids.
        inputs: Vec<ModuleId>,
    },
}

impl ModuleSpec {
    /// Returns the source ids for this node, in slot order.
    pub fn inputs(&self) -> &[ModuleId] {
        match self {
            ModuleSpec::Abs { inputs }
            | ModuleSpec::Clamp { inputs, .. }
            | ModuleSpec::Invert { inputs }
            | ModuleSpec::ScaleBias { inputs, .. }
            | ModuleSpec::Exponent { inputs, .. }
            | ModuleSpec::Add { inputs }
            | ModuleSpec::Subtract { inputs }
            | ModuleSpec::Multiply { inputs }
            | ModuleSpec::Min { inputs }
            | ModuleSpec::Max { inputs }
            | ModuleSpec::Power { inputs }
            | ModuleSpec::Blend { inputs } => inputs,
            ModuleSpec::Constant { .. } | ModuleSpec::External { .. } => &[],
        }
    }

    /// Number of sources the module type reads.
    pub fn required_inputs(&self) -> usize {
        match self {
            ModuleSpec::Constant { .. } | ModuleSpec::External { .. } => 0,
            ModuleSpec::Abs { .. }
            | ModuleSpec::Clamp { .. }
            | ModuleSpec::Invert { .. }
            | ModuleSpec::ScaleBias { .. }
            | ModuleSpec::Exponent { .. } => 1,
            ModuleSpec::Add { .. }
            | ModuleSpec::Subtract { .. }
            | ModuleSpec::Multiply { .. }
            | ModuleSpec::Min { .. }
            | ModuleSpec::Max { .. }
            | ModuleSpec::Power { .. } => 2,
            ModuleSpec::Blend { .. } => 3,
        }
    }

    /// Module type name, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ModuleSpec::Constant { .. } => "Constant",
            ModuleSpec::External { .. } => "External",
            ModuleSpec::Abs { .. } => "Abs",
            ModuleSpec::Clamp { .. } => "Clamp",
            ModuleSpec::Invert { .. } => "Invert",
            ModuleSpec::ScaleBias { .. } => "ScaleBias",
            ModuleSpec::Exponent { .. } => "Exponent",
            ModuleSpec::Add { .. } => "Add",
            ModuleSpec::Subtract { .. } => "Subtract",
            ModuleSpec::Multiply { .. } => "Multiply",
            ModuleSpec::Min { .. } => "Min",
            ModuleSpec::Max { .. } => "Max",
            ModuleSpec::Power { .. } => "Power",
            ModuleSpec::Blend { .. } => "Blend",
        }
    }

    /// Creates a new constant value node specification.
    pub fn constant(value: f32) -> Self {
        ModuleSpec::Constant {
            params: ConstantParams { value },
        }
    }

    /// Creates a node resolved from the registry under `module_id`.
    pub fn external(module_id: impl Into<String>) -> Self {
        ModuleSpec::External {
            params: ExternalParams {
                module_id: module_id.into(),
            },
        }
    }

    pub fn abs(input: ModuleId) -> Self {
        ModuleSpec::Abs {
            inputs: vec![input],
        }
    }

    pub fn clamp(input: ModuleId, min: f32, max: f32) -> Self {
        ModuleSpec::Clamp {
            inputs: vec![input],
            params: ClampParams { min, max },
        }
    }

    pub fn invert(input: ModuleId) -> Self {
        ModuleSpec::Invert {
            inputs: vec![input],
        }
    }

    pub fn scale_bias(input: ModuleId, scale: f32, bias: f32) -> Self {
        ModuleSpec::ScaleBias {
            inputs: vec![input],
            params: ScaleBiasParams { scale, bias },
        }
    }

    pub fn exponent(input: ModuleId, exponent: f32) -> Self {
        ModuleSpec::Exponent {
            inputs: vec![input],
            params: ExponentParams { exponent },
        }
    }

    pub fn add(lhs: ModuleId, rhs: ModuleId) -> Self {
        ModuleSpec::Add {
            inputs: vec![lhs, rhs],
        }
    }

    pub fn subtract(lhs: ModuleId, rhs: ModuleId) -> Self {
        ModuleSpec::Subtract {
            inputs: vec![lhs, rhs],
        }
    }

    pub fn multiply(lhs: ModuleId, rhs: ModuleId) -> Self {
        ModuleSpec::Multiply {
            inputs: vec![lhs, rhs],
        }
    }

    pub fn min(lhs: ModuleId, rhs: ModuleId) -> Self {
        ModuleSpec::Min {
            inputs: vec![lhs, rhs],
        }
    }

    pub fn max(lhs: ModuleId, rhs: ModuleId) -> Self {
        ModuleSpec::Max {
            inputs: vec![lhs, rhs],
        }
    }

    pub fn power(base: ModuleId, exponent: ModuleId) -> Self {
        ModuleSpec::Power {
            inputs: vec![base, exponent],
        }
    }

    /// Creates a blend node; `control` weights between `a` (at -1) and `b` (at 1).
    pub fn blend(a: ModuleId, b: ModuleId, control: ModuleId) -> Self {
        ModuleSpec::Blend {
            inputs: vec![a, b, control],
        }
    }
}

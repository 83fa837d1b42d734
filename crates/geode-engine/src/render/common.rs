//! GPU-side layouts shared by pipelines, buffers and scenes.

use bytemuck::{Pod, Zeroable};

use crate::animation::InstanceRecord;
use crate::geometry::{OutlineVertex, SolidVertex};

// ── blend ─────────────────────────────────────────────────────────────────

/// Source-over for premultiplied color.
pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

// ── uniforms ──────────────────────────────────────────────────────────────

/// Uniform block of the outline program.
///
///  offset  0  projection  mat4x4<f32>
///  offset 64  base_color  vec4<f32>
///  offset 80  time        f32
///  offset 84  (pad to 96, struct alignment 16)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FlowerUniforms {
    pub projection: [[f32; 4]; 4],
    pub base_color: [f32; 4],
    pub time: f32,
    pub _pad: [f32; 3],
}

/// Uniform block of the solid program.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SolidUniforms {
    pub mvp: [[f32; 4]; 4],
}

/// Minimum binding size for a uniform block of type `U`.
pub(super) fn uniform_binding_size<U: Pod>() -> Option<wgpu::BufferSize> {
    wgpu::BufferSize::new(std::mem::size_of::<U>() as u64)
}

/// Single-uniform bind group layout visible to the vertex stage.
pub(super) fn uniform_bind_group_layout<U: Pod>(
    device: &wgpu::Device,
    label: &str,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: uniform_binding_size::<U>(),
            },
            count: None,
        }],
    })
}

// ── vertex layouts ────────────────────────────────────────────────────────

impl OutlineVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OutlineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Instance layout (16 bytes), buffer slot 1:
///
///  offset  0  offset  [f32; 2]  loc 1
///  offset  8  scale   f32       loc 2
///  offset 12  alpha   f32       loc 3
impl InstanceRecord {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        1 => Float32x2, // offset
        2 => Float32,   // scale
        3 => Float32    // alpha
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRecord>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

impl SolidVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4  // color
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SolidVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

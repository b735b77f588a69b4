use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::particle::Circle;

pub const CIRCLE_SHADER: &str = include_str!("shaders/circle.wgsl");

/// Per-instance circle data, one per particle.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 3],
}

impl From<&Circle> for CircleInstance {
    fn from(circle: &Circle) -> Self {
        Self {
            center: circle.position.to_array(),
            radius: circle.radius,
            color: circle.color.to_array(),
        }
    }
}

impl CircleInstance {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32, 2 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub canvas_size: [f32; 2],
    pub ndc_extent: [f32; 2],
}

impl Uniforms {
    pub fn new(canvas_size: Vec2, ndc_extent: Vec2) -> Self {
        Self {
            canvas_size: canvas_size.to_array(),
            ndc_extent: ndc_extent.to_array(),
        }
    }
}

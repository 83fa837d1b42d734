use std::marker::PhantomData;

use bytemuck::Pod;
use wgpu::util::DeviceExt;

use crate::animation::InstanceRecord;

/// Vertex + index buffers for one piece of geometry.
pub struct GeometryBuffers {
    pub vertex: wgpu::Buffer,
    pub index: wgpu::Buffer,
    pub index_count: u32,
}

/// Owns the buffers one scene draws from.
///
/// Roles:
/// - geometry: replaced wholesale when content changes
/// - uniform: overwritten every frame
/// - instance: optional, fixed capacity, overwritten every frame
///
/// `U` is the uniform block type; its size is fixed at creation.
pub struct BufferManager<U: Pod> {
    label: &'static str,

    geometry: Option<GeometryBuffers>,

    uniform: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,

    instances: Option<wgpu::Buffer>,
    instance_capacity: usize,

    _uniform: PhantomData<U>,
}

impl<U: Pod> BufferManager<U> {
    /// Allocates the uniform buffer (and instance buffer when
    /// `instance_capacity > 0`) and binds the uniform at group 0, binding 0
    /// of `layout`.
    pub fn new(
        device: &wgpu::Device,
        label: &'static str,
        layout: &wgpu::BindGroupLayout,
        instance_capacity: usize,
    ) -> Self {
        let uniform = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<U>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
        });

        let instances = (instance_capacity > 0).then(|| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: (instance_capacity * std::mem::size_of::<InstanceRecord>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });

        Self {
            label,
            geometry: None,
            uniform,
            uniform_bind_group,
            instances,
            instance_capacity,
            _uniform: PhantomData,
        }
    }

    /// Uploads new geometry into fresh buffers and swaps them in.
    ///
    /// Frames already submitted keep the previous buffers alive until the GPU
    /// is done with them. Empty geometry clears the slot.
    pub fn rebuild_geometry<V: Pod>(&mut self, device: &wgpu::Device, vertices: &[V], indices: &[u16]) {
        if vertices.is_empty() || indices.is_empty() {
            log::debug!("{}: empty geometry, clearing buffers", self.label);
            self.geometry = None;
            return;
        }

        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(self.label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(self.label),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "{}: geometry rebuilt ({} vertices, {} indices)",
            self.label,
            vertices.len(),
            indices.len()
        );

        self.geometry = Some(GeometryBuffers {
            vertex,
            index,
            index_count: indices.len() as u32,
        });
    }

    /// Overwrites the whole uniform block.
    pub fn write_uniforms(&self, queue: &wgpu::Queue, block: &U) {
        queue.write_buffer(&self.uniform, 0, bytemuck::bytes_of(block));
    }

    /// Writes `records` to the front of the instance buffer and returns how
    /// many were written. Records past capacity are dropped.
    pub fn write_instances(&self, queue: &wgpu::Queue, records: &[InstanceRecord]) -> u32 {
        let Some(buffer) = self.instances.as_ref() else {
            if !records.is_empty() {
                log::warn!("{}: no instance buffer, {} records dropped", self.label, records.len());
            }
            return 0;
        };

        let n = clamp_to_capacity(records.len(), self.instance_capacity);
        if n < records.len() {
            log::warn!(
                "{}: {} instance records exceed capacity {}, extra dropped",
                self.label,
                records.len(),
                self.instance_capacity
            );
        }
        if n > 0 {
            queue.write_buffer(buffer, 0, bytemuck::cast_slice(&records[..n]));
        }
        n as u32
    }

    pub fn geometry(&self) -> Option<&GeometryBuffers> {
        self.geometry.as_ref()
    }

    pub fn uniform_bind_group(&self) -> &wgpu::BindGroup {
        &self.uniform_bind_group
    }

    pub fn instances(&self) -> Option<&wgpu::Buffer> {
        self.instances.as_ref()
    }

    pub fn instance_capacity(&self) -> usize {
        self.instance_capacity
    }
}

/// Number of records that fit in a buffer with room for `capacity`.
#[inline]
pub fn clamp_to_capacity(len: usize, capacity: usize) -> usize {
    len.min(capacity)
}

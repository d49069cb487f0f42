//! Dynamic GPU buffer management with automatic resizing
//!
//! Instance and vertex counts change every frame (particles come and go,
//! arcs are rebuilt), so buffers grow with a 2x strategy and never shrink.

use std::marker::PhantomData;

/// A typed GPU buffer that grows when data exceeds capacity.
pub struct TypedBuffer<T> {
    buffer: wgpu::Buffer,
    capacity: usize, // Capacity in items
    count: usize,
    usage: wgpu::BufferUsages,
    label: String,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Empty buffer with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Self::allocate(device, label, capacity, usage),
            capacity,
            count: 0,
            usage,
            label: label.to_owned(),
            _marker: PhantomData,
        }
    }

    fn allocate(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * size_of::<T>()) as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Write data to the buffer, growing if necessary.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let reallocated = if data.len() > self.capacity {
            let new_capacity = (data.len() * 2).max(self.capacity + 64);
            self.buffer =
                Self::allocate(device, &self.label, new_capacity, self.usage);
            log::debug!(
                "{} grown to {new_capacity} items",
                self.label
            );
            self.capacity = new_capacity;
            true
        } else {
            false
        };

        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.count = data.len();
        reallocated
    }

    /// The underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Items written by the last [`write`](Self::write).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count as u32
    }

    /// Whether the last write was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Capacity in items.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

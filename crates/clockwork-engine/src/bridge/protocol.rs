//! Frame buffer layout shared with the host page.
//! Must stay in sync with the host's `protocol.js`.
//!
//! Layout (all values f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Uniforms: 44 floats]
//! [Draw commands: max_draw_commands × 24 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written into the header every frame, so the host can
//! compute section offsets without hard-coding them.

use log::warn;

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::draw::{DrawCommand, DrawList, FrameUniforms};

pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_COMMANDS: usize = 2;
pub const HEADER_COMMAND_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_VIEWPORT_WIDTH: usize = 6;
pub const HEADER_VIEWPORT_HEIGHT: usize = 7;
pub const HEADER_CLEAR_COLOR: usize = 8; // 4 floats: r, g, b, a
pub const HEADER_LAYER_COUNTS: usize = 12; // 3 floats: background, objects, overlay
pub const HEADER_ELAPSED: usize = 15;

pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_draw_commands: usize,
    pub max_events: usize,

    pub uniforms_offset: usize,
    pub command_data_offset: usize,
    pub command_data_floats: usize,
    pub event_data_offset: usize,
    pub event_data_floats: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

/// Per-frame values written into the header alongside the payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameHeader {
    pub frame: u64,
    pub viewport: (f32, f32),
    pub clear_color: [f32; 4],
    pub elapsed: f64,
}

impl ProtocolLayout {
    pub fn new(max_draw_commands: usize, max_events: usize) -> Self {
        let uniforms_offset = HEADER_FLOATS;
        let command_data_offset = uniforms_offset + FrameUniforms::FLOATS;
        let command_data_floats = max_draw_commands * DrawCommand::FLOATS;
        let event_data_offset = command_data_offset + command_data_floats;
        let event_data_floats = max_events * GameEvent::FLOATS;
        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_draw_commands,
            max_events,
            uniforms_offset,
            command_data_offset,
            command_data_floats,
            event_data_offset,
            event_data_floats,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_draw_commands, config.max_events)
    }

    /// Write one frame into `buffer`, resizing it to the layout first.
    ///
    /// Commands and events beyond capacity are dropped with a warning.
    pub fn pack(
        &self,
        buffer: &mut Vec<f32>,
        header: &FrameHeader,
        uniforms: &FrameUniforms,
        draw_list: &DrawList,
        events: &[GameEvent],
    ) {
        buffer.resize(self.buffer_total_floats, 0.0);

        let commands = &draw_list.commands;
        let command_count = commands.len().min(self.max_draw_commands);
        if command_count < commands.len() {
            warn!(
                "draw list truncated: {} commands, capacity {}",
                commands.len(),
                self.max_draw_commands
            );
        }
        let event_count = events.len().min(self.max_events);
        if event_count < events.len() {
            warn!("event queue truncated: {} events, capacity {}", events.len(), self.max_events);
        }

        let h = &mut buffer[..HEADER_FLOATS];
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_FRAME_COUNTER] = header.frame as f32;
        h[HEADER_MAX_COMMANDS] = self.max_draw_commands as f32;
        h[HEADER_COMMAND_COUNT] = command_count as f32;
        h[HEADER_MAX_EVENTS] = self.max_events as f32;
        h[HEADER_EVENT_COUNT] = event_count as f32;
        h[HEADER_VIEWPORT_WIDTH] = header.viewport.0;
        h[HEADER_VIEWPORT_HEIGHT] = header.viewport.1;
        h[HEADER_CLEAR_COLOR..HEADER_CLEAR_COLOR + 4].copy_from_slice(&header.clear_color);
        for (i, count) in draw_list.layer_counts.iter().enumerate() {
            h[HEADER_LAYER_COUNTS + i] = *count as f32;
        }
        h[HEADER_ELAPSED] = header.elapsed as f32;

        let uniform_floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(uniforms));
        buffer[self.uniforms_offset..self.command_data_offset].copy_from_slice(uniform_floats);

        let command_floats: &[f32] = bytemuck::cast_slice(&commands[..command_count]);
        buffer[self.command_data_offset..self.command_data_offset + command_floats.len()]
            .copy_from_slice(command_floats);

        let event_floats: &[f32] = bytemuck::cast_slice(&events[..event_count]);
        buffer[self.event_data_offset..self.event_data_offset + event_floats.len()]
            .copy_from_slice(event_floats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layer::RenderLayer;

    fn header() -> FrameHeader {
        FrameHeader {
            frame: 7,
            viewport: (800.0, 600.0),
            clear_color: [0.1, 0.1, 0.15, 1.0],
            elapsed: 1.5,
        }
    }

    #[test]
    fn default_layout_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        assert_eq!(layout.uniforms_offset, 16);
        assert_eq!(layout.command_data_offset, 16 + 44);
        assert_eq!(layout.event_data_offset, 16 + 44 + 256 * 24);
        assert_eq!(layout.buffer_total_floats, 16 + 44 + 256 * 24 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 3);
        assert_eq!(layout.event_data_offset, layout.command_data_offset + layout.command_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn pack_writes_header_and_sections() {
        let layout = ProtocolLayout::new(4, 2);
        let mut list = DrawList::new();
        list.commands.push(DrawCommand { mesh_id: 5.0, ..Default::default() });
        list.layer_counts[RenderLayer::Objects.as_u8() as usize] = 1;
        let uniforms = FrameUniforms { ambient: 0.2, ..Default::default() };
        let events = [GameEvent::new(1.0, 10.0, 30.0, 2.0)];

        let mut buffer = Vec::new();
        layout.pack(&mut buffer, &header(), &uniforms, &list, &events);

        assert_eq!(buffer.len(), layout.buffer_total_floats);
        assert_eq!(buffer[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(buffer[HEADER_COMMAND_COUNT], 1.0);
        assert_eq!(buffer[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(buffer[HEADER_LAYER_COUNTS + 1], 1.0);
        assert_eq!(buffer[HEADER_CLEAR_COLOR + 3], 1.0);
        assert_eq!(buffer[layout.command_data_offset - 1], 0.2);
        assert_eq!(buffer[layout.command_data_offset], 5.0);
        assert_eq!(&buffer[layout.event_data_offset..layout.event_data_offset + 4], &[1.0, 10.0, 30.0, 2.0]);
    }

    #[test]
    fn pack_truncates_to_capacity() {
        let layout = ProtocolLayout::new(1, 1);
        let mut list = DrawList::new();
        list.commands.push(DrawCommand::default());
        list.commands.push(DrawCommand::default());
        let events = [GameEvent::default(); 3];
        let mut buffer = Vec::new();
        layout.pack(&mut buffer, &header(), &FrameUniforms::default(), &list, &events);
        assert_eq!(buffer[HEADER_COMMAND_COUNT], 1.0);
        assert_eq!(buffer[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(buffer.len(), layout.buffer_total_floats);
    }
}

//! WebGL2 collaborator: compiles the fractal shader, owns the full-screen quad
//! and uploads the per-frame uniforms.

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::RenderError;
use crate::model::ShaderUniforms;
use crate::state::ViewportRect;

const VERT_SRC: &str = include_str!("shaders/quad.vert");
const FRAG_SRC: &str = include_str!("shaders/mandelbrot.frag");

// Two triangles covering clip space, drawn as a strip.
const QUAD: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

struct Uniforms {
    offset: Option<WebGlUniformLocation>,
    zoom: Option<WebGlUniformLocation>,
    iterations: Option<WebGlUniformLocation>,
    resolution: Option<WebGlUniformLocation>,
}

pub struct Renderer {
    canvas: HtmlCanvasElement,
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    locs: Uniforms,
    rect: ViewportRect,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, RenderError> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or(RenderError::NoContext)?
            .dyn_into()
            .map_err(|_| RenderError::NoContext)?;

        let program = link_program(&gl, VERT_SRC, FRAG_SRC)?;
        gl.use_program(Some(&program));

        let vao = gl.create_vertex_array().ok_or(RenderError::Create("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));
        let buffer = gl.create_buffer().ok_or(RenderError::Create("buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let verts = js_sys::Float32Array::from(&QUAD[..]);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &verts, GL::STATIC_DRAW);
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 2, GL::FLOAT, false, 0, 0);

        let locs = Uniforms {
            offset: gl.get_uniform_location(&program, "offset"),
            zoom: gl.get_uniform_location(&program, "zoom"),
            iterations: gl.get_uniform_location(&program, "iterations"),
            resolution: gl.get_uniform_location(&program, "resolution"),
        };

        Ok(Self {
            canvas,
            gl,
            program,
            vao,
            locs,
            rect: ViewportRect::default(),
        })
    }

    /// Resize the backing store and the region the shader covers.
    pub fn apply_viewport(&mut self, rect: &ViewportRect) {
        self.canvas.set_width(rect.width);
        self.canvas.set_height(rect.height);
        self.gl.viewport(rect.x, rect.y, rect.width as i32, rect.height as i32);
        self.rect = *rect;
    }

    pub fn draw(&self, u: &ShaderUniforms) {
        if self.rect.width == 0 || self.rect.height == 0 {
            return;
        }
        let gl = &self.gl;
        gl.use_program(Some(&self.program));
        gl.bind_vertex_array(Some(&self.vao));
        gl.uniform2f(self.locs.offset.as_ref(), u.offset[0] as f32, u.offset[1] as f32);
        gl.uniform1f(self.locs.zoom.as_ref(), u.zoom as f32);
        gl.uniform1f(self.locs.iterations.as_ref(), u.iterations as f32);
        gl.uniform2f(
            self.locs.resolution.as_ref(),
            self.rect.width as f32,
            self.rect.height as f32,
        );
        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
    }
}

fn compile_shader(gl: &GL, src: &str, shader_type: u32) -> Result<WebGlShader, RenderError> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or(RenderError::Create("shader"))?;
    gl.shader_source(&shader, src);
    gl.compile_shader(&shader);
    if !gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Err(RenderError::Compile(
            gl.get_shader_info_log(&shader).unwrap_or_default(),
        ));
    }
    Ok(shader)
}

fn link_program(gl: &GL, vert_src: &str, frag_src: &str) -> Result<WebGlProgram, RenderError> {
    let vert = compile_shader(gl, vert_src, GL::VERTEX_SHADER)?;
    let frag = compile_shader(gl, frag_src, GL::FRAGMENT_SHADER)?;
    let prog = gl.create_program().ok_or(RenderError::Create("program"))?;
    gl.attach_shader(&prog, &vert);
    gl.attach_shader(&prog, &frag);
    gl.link_program(&prog);
    if !gl
        .get_program_parameter(&prog, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Err(RenderError::Link(
            gl.get_program_info_log(&prog).unwrap_or_default(),
        ));
    }
    Ok(prog)
}

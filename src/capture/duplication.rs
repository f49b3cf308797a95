//! One-shot primary display capture using DXGI Desktop Duplication.
//!
//! Requires Windows 8+ and a DirectX 11 capable GPU. Duplication is not
//! available in every session type (e.g. over RDP); that surfaces as a
//! `DuplicateOutput` failure.

use anyhow::{anyhow, Context, Result};

use windows::core::Interface;
use windows::Win32::Graphics::Direct3D::D3D_DRIVER_TYPE_HARDWARE;
use windows::Win32::Graphics::Direct3D11::{
    D3D11CreateDevice, ID3D11Device, ID3D11DeviceContext, ID3D11Resource, ID3D11Texture2D,
    D3D11_CPU_ACCESS_READ, D3D11_CREATE_DEVICE_BGRA_SUPPORT, D3D11_MAP_READ, D3D11_SDK_VERSION,
    D3D11_TEXTURE2D_DESC, D3D11_USAGE_STAGING,
};
use windows::Win32::Graphics::Dxgi::{
    IDXGIAdapter, IDXGIDevice, IDXGIOutput, IDXGIOutput1, IDXGIResource, DXGI_OUTDUPL_FRAME_INFO,
};

use crate::frame::Frame;

/// Fixed wait for the desktop compositor to produce a frame.
const ACQUIRE_TIMEOUT_MS: u32 = 1000;

/// Captures one frame of the primary display.
///
/// This function:
/// 1. Creates a D3D11 hardware device with BGRA support
/// 2. Walks up to the DXGI adapter and duplicates the primary output
/// 3. Acquires a single desktop frame (bounded wait)
/// 4. Copies the GPU texture into a CPU-readable staging texture
/// 5. Maps the staging texture and de-pads the rows into a `Frame`
///
/// All COM interface handles are released on drop in reverse order of
/// acquisition. Any failing platform call is terminal.
pub fn capture_primary_output() -> Result<Frame> {
    crate::log("Creating D3D11 device...");
    let (device, context) = create_d3d11_device()?;

    crate::log("Duplicating primary output...");
    let duplication = duplicate_primary_output(&device)?;

    crate::log("Acquiring desktop frame...");
    let mut frame_info = DXGI_OUTDUPL_FRAME_INFO::default();
    let mut desktop_resource: Option<IDXGIResource> = None;
    unsafe {
        duplication
            .AcquireNextFrame(ACQUIRE_TIMEOUT_MS, &mut frame_info, &mut desktop_resource)
            .context("AcquireNextFrame failed (no frame within timeout?)")?;
    }
    let desktop_resource =
        desktop_resource.ok_or_else(|| anyhow!("AcquireNextFrame returned no resource"))?;
    let desktop_texture: ID3D11Texture2D = desktop_resource
        .cast()
        .context("Failed to cast desktop resource to ID3D11Texture2D")?;

    // Mirror the desktop texture into a CPU-readable staging texture
    let mut desc = D3D11_TEXTURE2D_DESC::default();
    unsafe { desktop_texture.GetDesc(&mut desc) };
    crate::log(&format!("Desktop frame: {}x{}", desc.Width, desc.Height));

    let staging_desc = D3D11_TEXTURE2D_DESC {
        Width: desc.Width,
        Height: desc.Height,
        MipLevels: 1,
        ArraySize: 1,
        Format: desc.Format,
        SampleDesc: desc.SampleDesc,
        Usage: D3D11_USAGE_STAGING,
        BindFlags: Default::default(),
        CPUAccessFlags: D3D11_CPU_ACCESS_READ.0 as u32,
        MiscFlags: Default::default(),
    };

    let staging_texture = unsafe {
        let mut staging: Option<ID3D11Texture2D> = None;
        device
            .CreateTexture2D(&staging_desc, None, Some(&mut staging))
            .context("CreateTexture2D for staging")?;
        staging.ok_or_else(|| anyhow!("Staging texture was None"))?
    };

    unsafe {
        context.CopyResource(
            &staging_texture.cast::<ID3D11Resource>()?,
            &desktop_texture.cast::<ID3D11Resource>()?,
        );
    }

    let mapped = unsafe {
        let mut mapped = Default::default();
        context
            .Map(
                &staging_texture.cast::<ID3D11Resource>()?,
                0,
                D3D11_MAP_READ,
                0,
                Some(&mut mapped),
            )
            .context("Map staging texture")?;
        mapped
    };

    let frame = unsafe {
        let src = std::slice::from_raw_parts(
            mapped.pData as *const u8,
            mapped.RowPitch as usize * desc.Height as usize,
        );
        Frame::from_padded_rows(src, mapped.RowPitch as usize, desc.Width, desc.Height)
    };

    unsafe {
        context.Unmap(&staging_texture.cast::<ID3D11Resource>()?, 0);
        let _ = duplication.ReleaseFrame();
    }

    crate::log("Frame copied to CPU");
    Ok(frame)
}

/// Creates a Direct3D 11 hardware device and immediate context.
fn create_d3d11_device() -> Result<(ID3D11Device, ID3D11DeviceContext)> {
    let mut device: Option<ID3D11Device> = None;
    let mut context: Option<ID3D11DeviceContext> = None;

    unsafe {
        D3D11CreateDevice(
            None,
            D3D_DRIVER_TYPE_HARDWARE,
            None,
            D3D11_CREATE_DEVICE_BGRA_SUPPORT,
            None,
            D3D11_SDK_VERSION,
            Some(&mut device),
            None,
            Some(&mut context),
        )
        .context("D3D11CreateDevice")?;
    }

    Ok((
        device.ok_or_else(|| anyhow!("Failed to create D3D11 device"))?,
        context.ok_or_else(|| anyhow!("Failed to create D3D11 context"))?,
    ))
}

/// Duplicates output 0 (the primary display) of the device's adapter.
fn duplicate_primary_output(
    device: &ID3D11Device,
) -> Result<windows::Win32::Graphics::Dxgi::IDXGIOutputDuplication> {
    let dxgi_device: IDXGIDevice = device.cast().context("Cast to IDXGIDevice")?;
    let adapter: IDXGIAdapter = unsafe { dxgi_device.GetAdapter() }.context("GetAdapter")?;
    let output: IDXGIOutput = unsafe { adapter.EnumOutputs(0) }.context("EnumOutputs(0)")?;
    let output1: IDXGIOutput1 = output.cast().context("Cast to IDXGIOutput1")?;

    unsafe {
        output1
            .DuplicateOutput(device)
            .context("DuplicateOutput (desktop duplication unavailable in this session?)")
    }
}

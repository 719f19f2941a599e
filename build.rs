use std::process::Command;

fn main() {
    // Let Cargo know to rerun if the build script changes
    println!("cargo:rerun-if-changed=build.rs");

    // Handle SDL2 library linking
    link_sdl2_library();
}

fn link_sdl2_library() {
    // Check if we're on macOS
    #[cfg(target_os = "macos")]
    {
        // Try to find SDL2 via homebrew
        if is_homebrew_available() {
            match get_homebrew_path("sdl2") {
                Ok(sdl2_path) => {
                    println!("cargo:rustc-link-search={}/lib", sdl2_path);
                    println!("cargo:rustc-link-lib=SDL2");
                }
                Err(e) => {
                    println!("cargo:warning={}; install it with 'brew install sdl2'", e);
                }
            }

            // Link system frameworks
            println!("cargo:rustc-link-lib=framework=CoreFoundation");
            println!("cargo:rustc-link-lib=framework=CoreGraphics");
            println!("cargo:rustc-link-lib=framework=CoreAudio");
            println!("cargo:rustc-link-lib=framework=AudioToolbox");
            println!("cargo:rustc-link-lib=framework=Metal");
        } else {
            println!("cargo:warning=Homebrew not found. Install SDL2 manually and set LIBRARY_PATH.");
        }
    }

    // For Linux systems
    #[cfg(target_os = "linux")]
    {
        println!("On Linux, you may need to install SDL2 with your package manager.");
        println!("For example: sudo apt-get install libsdl2-dev");
    }

    // For Windows systems
    #[cfg(target_os = "windows")]
    {
        println!("On Windows, make sure SDL2.dll and SDL2.lib are in your PATH or LIB directory.");
    }
}

#[allow(dead_code)]
fn is_homebrew_available() -> bool {
    Command::new("brew").arg("--version").output().is_ok()
}

#[allow(dead_code)]
fn get_homebrew_path(package: &str) -> Result<String, String> {
    match Command::new("brew").args(["--prefix", package]).output() {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
            } else {
                Err(format!("Package {} not found in homebrew", package))
            }
        }
        Err(e) => Err(format!("Failed to execute brew command: {}", e)),
    }
}

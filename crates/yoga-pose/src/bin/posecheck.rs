use {
    anyhow::{Context, Result, bail},
    std::io::{self, BufRead, Write},
    yoga_base::init_logger,
    yoga_pose::*,
};

const CONFIG_PATH: &str = "posecheck.toml";

const USAGE: &str = "usage:
  posecheck calibrate <frame.json> <pose-name> [tolerance] [--force]
  posecheck check <frames.jsonl> <pose-name>
  posecheck plan";

fn confirm_on_stdin(name: &str) -> bool {
    print!("Pose '{}' already exists. Overwrite? (y/n): ", name);
    io::stdout().flush().ok();
    let mut answer = String::new();
    io::stdin().read_line(&mut answer).is_ok() && answer.trim().eq_ignore_ascii_case("y")
}

fn calibrate(config: &CoachConfig, args: &[String]) -> Result<()> {
    let force = args.iter().any(|a| a == "--force");
    let positional: Vec<&String> = args.iter().filter(|a| *a != "--force").collect();
    let [frame_path, pose_name, rest @ ..] = positional.as_slice() else {
        bail!(USAGE);
    };
    let tolerance = match rest.first() {
        Some(t) => t.parse().with_context(|| format!("invalid tolerance '{}'", t))?,
        None => config.tolerance,
    };

    let json = std::fs::read_to_string(frame_path)
        .with_context(|| format!("could not read {}", frame_path))?;
    let frame = LandmarkFrame::from_json(&json)?;
    let angles = extract_angles(&frame.world_landmarks());
    for (key, degrees) in angles.detected() {
        println!("{}: {}", key, degrees as i32);
    }

    let mut store = TemplateStore::load(&config.templates_path)?;
    let calibrator = Calibrator::from_config(config).with_tolerance(tolerance);
    let snapshot = calibrator.calibrate(&mut store, pose_name, &angles, |name| {
        force || confirm_on_stdin(name)
    })?;

    println!(
        "Pose '{}' saved to {}.",
        snapshot.pose_name,
        calibrator.templates_path().display()
    );
    println!("Store the reference image at {}.", snapshot.path.display());
    Ok(())
}

fn check(config: &CoachConfig, args: &[String]) -> Result<()> {
    let [frames_path, pose_name, ..] = args else {
        bail!(USAGE);
    };
    let store = TemplateStore::load(&config.templates_path)?;
    let mut matcher = PoseMatcher::new(LastVerdict::new());

    let file = std::fs::File::open(frames_path)
        .with_context(|| format!("could not open {}", frames_path))?;
    for (number, line) in io::BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let frame = LandmarkFrame::from_json(&line)
            .with_context(|| format!("frame {} is not valid JSON", number + 1))?;
        let angles = extract_angles(&frame.world_landmarks());
        let result = matcher.evaluate(&angles, pose_name, &store);

        let joints: Vec<String> = result
            .verdicts()
            .map(|(key, ok)| {
                let reading = match angles.get(key).degrees() {
                    Some(d) => format!("{}", d as i32),
                    None => "-".to_string(),
                };
                format!("{}={}{}", key, reading, if ok { "" } else { "!" })
            })
            .collect();
        println!(
            "frame {}: {} [{}]",
            number + 1,
            if result.is_correct() { "correct" } else { "incorrect" },
            joints.join(" ")
        );
    }

    let last = matcher.last_verdict();
    println!("last verdict: {}", if last.is_correct() { "correct" } else { "incorrect" });
    Ok(())
}

fn plan(config: &CoachConfig) -> Result<()> {
    let store = TemplateStore::load(&config.templates_path)?;
    let plan = SessionPlan::from_store(&store, config.poses_per_session);
    println!("today: {}", plan.today().join(", "));
    println!("next day: {}", plan.next_day().join(", "));
    Ok(())
}

fn main() -> Result<()> {
    let (config, load_error) = CoachConfig::load_or_default(CONFIG_PATH);
    init_logger(&config.log_config())?;
    if let Some(err) = load_error {
        log::warn!("using default configuration, could not read {}: {}", CONFIG_PATH, err);
    }
    log::debug!("configuration: {:?}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("calibrate") => calibrate(&config, &args[1..]),
        Some("check") => check(&config, &args[1..]),
        Some("plan") => plan(&config),
        _ => bail!(USAGE),
    }
}

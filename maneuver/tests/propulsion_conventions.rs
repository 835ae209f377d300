use maneuver::{builtins::calm_morning, vesselspecs, ScenarioSpec, Simulation, StartPose, VesselSpec};

fn open_still_water() -> ScenarioSpec {
    let mut s = calm_morning();
    s.wind.speed_kts = 0.0;
    s.wind.gust_kts = 0.0;
    s.current.speed_kts = 0.0;
    s.traffic.clear();
    s.start = StartPose { x: 450.0, y: 350.0, heading_deg: 0.0 };
    s
}

fn without_pier(mut v: VesselSpec) -> VesselSpec {
    v.bank_suction = None;
    v
}

fn run(sim: &mut Simulation, steps: usize) {
    for _ in 0..steps {
        sim.step(0.05).expect("step");
    }
}

#[test]
fn positive_steer_increases_heading_underway() {
    for vessel in [vesselspecs::cruise_azipod_spec(), vesselspecs::ferry_rudder_spec()] {
        let mut sim = Simulation::new(open_still_water(), without_pier(vessel)).expect("valid sim");
        sim.set_thrust(50.0).expect("thrust");
        run(&mut sim, 300);
        let h0 = sim.state().heading;
        sim.set_steer(20.0).expect("steer");
        run(&mut sim, 300);
        let h1 = sim.state().heading;
        assert!(h1 > h0 + 0.005, "{}: heading {h0} -> {h1}", sim.vessel().name);
    }
}

#[test]
fn rudder_reverses_authority_astern() {
    let mut sim = Simulation::new(open_still_water(), vesselspecs::ferry_rudder_spec()).expect("valid sim");
    sim.set_thrust(-50.0).expect("thrust");
    run(&mut sim, 300);
    assert!(sim.state().velocity.x < 0.0, "should be making sternway");
    let h0 = sim.state().heading;
    sim.set_steer(20.0).expect("steer");
    run(&mut sim, 300);
    let h1 = sim.state().heading;
    assert!(h1 < h0 - 0.005, "heading {h0} -> {h1}");
}

#[test]
fn rudder_is_useless_without_way() {
    let mut sim = Simulation::new(open_still_water(), vesselspecs::ferry_rudder_spec()).expect("valid sim");
    sim.set_steer(35.0).expect("steer");
    run(&mut sim, 400);
    assert_eq!(sim.state().heading, 0.0);
    assert_eq!(sim.state().yaw_rate, 0.0);
}

#[test]
fn azipod_turns_from_standstill() {
    let mut sim =
        Simulation::new(open_still_water(), without_pier(vesselspecs::cruise_azipod_spec())).expect("valid sim");
    sim.set_steer(30.0).expect("steer");
    sim.set_thrust(40.0).expect("thrust");
    run(&mut sim, 200);
    assert!(sim.state().yaw_rate > 0.0);
    assert!(sim.state().heading > 0.0);
}

#[test]
fn positive_thruster_pushes_to_starboard() {
    for vessel in [vesselspecs::cruise_azipod_spec(), vesselspecs::ferry_rudder_spec()] {
        let mut sim = Simulation::new(open_still_water(), without_pier(vessel)).expect("valid sim");
        sim.set_thruster(100.0).expect("thruster");
        run(&mut sim, 200);
        let st = sim.state();
        // Heading 0 puts starboard on world +y
        assert!(st.position.y > 350.0, "{}: y={}", sim.vessel().name, st.position.y);
        assert!((st.position.x - 450.0).abs() < 1e-9);
    }
}

#[test]
fn ahead_thrust_moves_along_heading() {
    let mut s = open_still_water();
    s.start.heading_deg = 90.0;
    let mut sim = Simulation::new(s, vesselspecs::ferry_rudder_spec()).expect("valid sim");
    sim.set_thrust(60.0).expect("thrust");
    run(&mut sim, 200);
    let st = sim.state();
    assert!(st.position.y > 355.0, "y={}", st.position.y);
    assert!((st.position.x - 450.0).abs() < 1e-6, "x={}", st.position.x);
}

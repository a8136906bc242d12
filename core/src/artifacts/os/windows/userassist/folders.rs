/**
 * Explorer often records paths relative to a Known Folder.
 * Ex: `{1AC14E77-02E7-4E5D-B744-2EB1AE5198B7}\cmd.exe`
 *
 * References:
 * `https://learn.microsoft.com/en-us/windows/win32/shell/knownfolderid`
 */

/// Known Folder GUID and its default location
const KNOWN_FOLDERS: [(&str, &str); 17] = [
    ("{1AC14E77-02E7-4E5D-B744-2EB1AE5198B7}", r"C:\Windows\System32"),
    ("{D65231B0-B2F1-4857-A4CE-A8E7C6EA7D27}", r"C:\Windows\SysWOW64"),
    ("{F38BF404-1D43-42F2-9305-67DE0B28FC23}", r"C:\Windows"),
    ("{905E63B6-C1BF-494E-B29C-65B732D3D21A}", r"C:\Program Files"),
    ("{6D809377-6AF0-444B-8957-A3773F02200E}", r"C:\Program Files"),
    ("{7C5A40EF-A0FB-4BFC-874A-C0F2E0B9FA8E}", r"C:\Program Files (x86)"),
    ("{F7F1ED05-9F6D-47A2-AAAE-29D317C6F066}", r"C:\Program Files\Common Files"),
    ("{DE974D24-D9C6-4D3E-BF91-F4455120B917}", r"C:\Program Files (x86)\Common Files"),
    ("{62AB5D82-FDC1-4DC3-A9DD-070D1D495D97}", r"C:\ProgramData"),
    ("{0139D44E-6AFE-49F2-8690-3DAFCAE6FFB8}", r"C:\ProgramData\Microsoft\Windows\Start Menu\Programs"),
    ("{A77F5D77-2E2B-44C3-A6A2-ABA601054A51}", r"%APPDATA%\Microsoft\Windows\Start Menu\Programs"),
    ("{9E3995AB-1F9C-4F13-B827-48B24B6C7174}", r"%APPDATA%\Microsoft\Internet Explorer\Quick Launch\User Pinned"),
    ("{3EB685DB-65F9-4CF6-A03A-E3EF65729F3D}", r"%APPDATA%"),
    ("{F1B32785-6FBA-4FCF-9D55-7B8E7F157091}", r"%LOCALAPPDATA%"),
    ("{B4BFCC3A-DB2C-424C-B029-7FE99A87C641}", r"%USERPROFILE%\Desktop"),
    ("{FDD39AD0-238F-46AF-ADB4-6C85480369C7}", r"%USERPROFILE%\Documents"),
    ("{374DE290-123F-4565-9164-39C4925E467B}", r"%USERPROFILE%\Downloads"),
];

/// Length of a braced GUID string
const GUID_LENGTH: usize = 38;

/// Swap a leading Known Folder GUID for its location. Empty string if there is none
pub(crate) fn resolve_folder(decoded_name: &str) -> String {
    let guid = match decoded_name.get(..GUID_LENGTH) {
        Some(result) => result,
        None => return String::new(),
    };

    for (folder_guid, location) in KNOWN_FOLDERS {
        if !folder_guid.eq_ignore_ascii_case(guid) {
            continue;
        }
        return format!("{location}{}", &decoded_name[GUID_LENGTH..]);
    }
    String::new()
}
